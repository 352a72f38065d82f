pub mod add;
pub mod del;
pub mod draft;
pub mod lookup;
pub mod validate;
