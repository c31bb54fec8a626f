#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        close_over_function_parameter is OK
        r#"
        fun make(param) {
            fun get() { return param; }
            return get;
        }
        print make("param")();
        "#,
        "param"
    }

    tests! {
        close_over_later_variable is OK
        r#"
        fun f() {
            var a = "a";
            var b = "b";
            fun show() { print b; print a; }
            return show;
        }
        f()();
        "#,
        "b", "a"
    }

    tests! {
        each_call_gets_its_own_closure is OK
        r#"
        fun counter() {
            var count = 0;
            fun increment() { count = count + 1; return count; }
            return increment;
        }
        var a = counter();
        var b = counter();
        print a();
        print a();
        print b();
        "#,
        "1", "2", "1"
    }

    tests! {
        assign_to_closed_over_variable is OK
        r#"
        fun make() {
            var value = "local";
            fun set(v) { value = v; }
            fun get() { return value; }
            set("changed");
            return get;
        }
        print make()();
        "#,
        "changed"
    }

    tests! {
        nested_closures_see_every_enclosing_scope is OK
        r#"
        fun outer() {
            var a = "a";
            fun middle() {
                var b = "b";
                fun inner() {
                    var c = "c";
                    print a;
                    print b;
                    print c;
                }
                inner();
            }
            middle();
        }
        outer();
        "#,
        "a", "b", "c"
    }

    tests! {
        shadowing_a_closed_over_variable_with_a_local is OK
        r#"
        var a = "global";
        fun show() { print a; }
        fun run() {
            var a = "local";
            show();
        }
        run();
        "#,
        "global"
    }
}
