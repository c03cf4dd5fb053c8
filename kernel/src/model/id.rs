use serde::{Deserialize, Serialize};
use shared::error::AppError;
use std::str::FromStr;

// 各テーブルの主キーは SERIAL なので i32 の newtype として定義する
macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i32);

        impl $id_type {
            pub fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub fn raw(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $id_type {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        /// Path parameters arrive as raw strings. Only a positive decimal
        /// integer is accepted; anything else is an invalid identifier.
        impl FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>()
                    .ok()
                    .filter(|raw| *raw > 0)
                    .map(Self)
                    .ok_or_else(|| {
                        AppError::InvalidIdentifier(format!(
                            "{} must be a positive integer: {s:?}",
                            stringify!($id_type)
                        ))
                    })
            }
        }
    };
}

define_id!(UserId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(EnrollmentId);
define_id!(AddressId);
define_id!(TicketId);
define_id!(TicketTypeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let id: HotelId = "42".parse().unwrap();
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for raw in ["abc", "", "0", "-3", "1.5", "12abc", " 7", "99999999999"] {
            let res = raw.parse::<HotelId>();
            assert!(
                matches!(res, Err(AppError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
