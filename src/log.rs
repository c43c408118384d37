#[macro_export]
macro_rules! debug {
    ($options:expr, $console:expr, $template:literal, $($value:expr),+) => {
        if $options.debug {
            $crate::log!($console, $template, $($value),+);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($console:expr, $template:literal, $($value:expr),+) => {
        $console.write_stderr(
            ("scope-path: ".to_owned() + &format!($template, $($value),+)).as_bytes(),
        ).await?;
        $console.write_stderr("\n".as_bytes()).await?;
    };
}
