#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals is OK
        r#"print "()"; print "a string"; print "A~¶Þॐஃ";"#,
        "()", "a string", "A~¶Þॐஃ"
    }

    tests! {
        spans_multiple_lines is OK
        "print \"1\n2\n3\";",
        "1\n2\n3"
    }

    tests! {
        unterminated_is_an_error is ERR
        "\"unterminated",
        "[line 1] Error: Unterminated string."
    }

    tests! {
        concatenation_stringifies_the_other_operand is OK
        r#"print "hi " + 3; print "n=" + 1;"#,
        "hi 3", "n=1"
    }
}
