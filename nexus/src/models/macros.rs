/// Declares an integer id assigned by the backend.
///
/// The wrapper serializes as a bare integer and prints as one, so it can be
/// dropped into request paths and payloads unchanged.
///
/// ```ignore
/// define_id_type!(BuildingId);
/// ```
#[macro_export]
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                $name(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<i64> for $name {
            fn from(value: i64) -> Self {
                $name(value)
            }
        }
    };
}
