//! The `record!` declaration macro.

/// Declare a struct and derive its [`Record`](crate::domain::Record) impl.
///
/// Each field's visibility token decides its [`Visibility`](crate::domain::Visibility):
/// a bare `pub` is public, everything else is non-public. Every field type
/// must implement [`MapValue`](crate::domain::MapValue).
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use micromap_core::record;
///
/// record! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Customer {
///         pub first_name: String,
///         pub last_name: String,
///         pub age_in_years: i32,
///         created_on_utc: DateTime<Utc>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $svis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $svis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::domain::Record for $name {
            fn type_name() -> &'static str {
                stringify!($name)
            }

            fn fields() -> &'static [$crate::domain::FieldDescriptor] {
                static FIELDS: ::std::sync::OnceLock<::std::vec::Vec<$crate::domain::FieldDescriptor>> =
                    ::std::sync::OnceLock::new();

                FIELDS.get_or_init(|| {
                    ::std::vec![
                        $(
                            $crate::domain::FieldDescriptor::new(
                                stringify!($field),
                                <$ty as $crate::domain::MapValue>::KIND,
                                $crate::domain::Visibility::from_token(stringify!($fvis)),
                            ),
                        )*
                    ]
                })
            }

            #[allow(unused_variables)]
            fn read_field(&self, name: &str) -> ::std::option::Option<$crate::domain::FieldValue> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(
                            ::std::clone::Clone::clone(&self.$field).into(),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            fn write_field(
                &mut self,
                name: &str,
                value: $crate::domain::FieldValue,
            ) -> ::std::result::Result<(), $crate::domain::DomainError> {
                $(
                    if name == stringify!($field) {
                        self.$field = <$ty as $crate::domain::MapValue>::from_value(value).map_err(
                            |rejected| $crate::domain::DomainError::IncompatibleAssignment {
                                type_name: stringify!($name),
                                field: ::std::string::String::from(name),
                                expected: <$ty as $crate::domain::MapValue>::KIND,
                                found: rejected.kind(),
                            },
                        )?;
                        return ::std::result::Result::Ok(());
                    }
                )*
                let _ = value;
                ::std::result::Result::Err($crate::domain::DomainError::InvalidFieldSelector {
                    type_name: stringify!($name),
                    selector: ::std::string::String::from(name),
                })
            }
        }
    };
}
