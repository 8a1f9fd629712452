// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a fresh `String`.
/// `join!(name, "-", code)` → `"Howrah-Jn-HWH"`
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
