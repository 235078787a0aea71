pub use ::std::{
    self,
    boxed::Box,
    convert::From,
    default::Default,
    ops::{Deref, DerefMut},
    option::Option::{self, None, Some},
    result::Result::{Err, Ok},
    string::String,
    vec::Vec,
};

pub use crate::de::{discriminate, read_into};
pub use crate::ser::shadow::Shadowed;
pub use crate::ser::write_field;

pub use self::help::Str as str;
mod help {
    pub type Str = str;
}
