// record
/// Build a [`crate::record::Record`] literal from `field => value` pairs;
/// values go through `Into<Value>`.
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ( $( $field:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::record::Record::new();
        $( record.insert($field, $value); )+
        record
    }};
}

// list
/// Build a [`crate::value::Value::List`] literal; items go through
/// `Into<Value>`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::value::Value::List(::std::vec::Vec::new())
    };
    ( $( $item:expr ),+ $(,)? ) => {
        $crate::value::Value::List(::std::vec![
            $( $crate::value::Value::from($item) ),+
        ])
    };
}
