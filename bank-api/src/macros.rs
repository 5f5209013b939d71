/// Builder-style setters for request structs.
///
/// `setter!(amount: i64)` assigns the field directly, `setter!(opt fund_id: FundId)`
/// wraps the value in `Some`.
macro_rules! setter {
    ($field:ident : $ty:ty) => {
        pub fn $field<T>(mut self, $field: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field = $field.into();
            self
        }
    };

    (opt $field:ident : $ty:ty) => {
        pub fn $field<T>(mut self, $field: T) -> Self
        where
            T: Into<$ty>,
        {
            self.$field = std::option::Option::Some($field.into());
            self
        }
    };
}

pub(crate) use setter;
