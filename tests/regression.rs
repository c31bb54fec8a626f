#[macro_use]
mod common;

#[cfg(test)]
mod regression {
    tests! {
        closures_do_not_leak_into_each_other is OK
        r#"
        fun make(x) {
            fun get() { return x; }
            return get;
        }
        var first = make(1);
        var second = make(2);
        print first();
        print second();
        print first();
        "#,
        "1", "2", "1"
    }

    tests! {
        continue_inside_for_still_runs_the_increment is OK
        "for (var i = 0; i < 3; i = i + 1) { continue; } print \"done\";",
        "done"
    }
}
