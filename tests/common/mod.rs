#[macro_export]
macro_rules! tests {
    ($name:ident is OK $source:expr $(, $expected:expr)* $(,)?) => {
        #[test]
        fn $name() {
            use std::cell::RefCell;
            use std::io::{self, Write};
            use std::rc::Rc;

            use klox::interpreter::Interpreter;
            use klox::parser::Parser;
            use klox::resolver::Resolver;
            use klox::scanner::Scanner;

            struct SharedWriter(Rc<RefCell<Vec<u8>>>);
            impl Write for SharedWriter {
                fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                    self.0.borrow_mut().write(buf)
                }
                fn flush(&mut self) -> io::Result<()> {
                    Ok(())
                }
            }

            let expected: Vec<&str> = vec![$($expected),*];
            let expected = if expected.is_empty() {
                String::new()
            } else {
                format!("{}\n", expected.join("\n"))
            };

            let output = Rc::new(RefCell::new(Vec::new()));
            let mut interpreter = Interpreter::with_output(Box::new(SharedWriter(Rc::clone(&output))));

            let tokens = Scanner::new($source).scan_tokens();
            let statements = Parser::new(tokens).parse();
            Resolver::new(&mut interpreter).resolve(&statements);
            interpreter.interpret(&statements);

            assert_eq!(String::from_utf8(output.borrow().clone()).unwrap(), expected);
        }
    };

    ($name:ident is ERR $source:expr, $($expected:expr),+ $(,)?) => {
        #[test]
        fn $name() {
            use assert_cmd::Command;

            let expected = vec![$($expected),+].join("\n");
            let path = std::env::temp_dir().join(format!("klox_test_{}_{}.klox", stringify!($name), std::process::id()));
            std::fs::write(&path, $source).unwrap();

            Command::cargo_bin("klox")
                .unwrap()
                .arg(&path)
                .assert()
                .stderr(format!("{expected}\n"))
                .failure();

            std::fs::remove_file(&path).ok();
        }
    };
}
