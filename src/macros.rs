// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Build a `Record` from `"field" => value` pairs.
///
/// ```
/// use league_browser::record;
/// let r = record! { "season" => 2021, "manager" => "A" };
/// assert_eq!(r.get("season").as_f64(), Some(2021.0));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::data::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut r = $crate::data::Record::new();
        $(
            r.set($name, $value);
        )+
        r
    }};
}
