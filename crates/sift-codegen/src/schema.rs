mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod view;
pub(crate) use view::View;
