pub mod birthday;
pub(crate) mod field;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{BirthdayDate, BIRTHDAY_FORMAT};
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use record::{ContactRecord, PhoneRemoval};
