pub mod indirect;
pub mod record;
pub mod reflect;
pub mod sequence;

// Re-export commonly used types
pub use indirect::Indirect;
pub use record::{FieldDescriptor, Record};
pub use reflect::{Dynamic, FloatSlot, IntSlot, Kind, Reflect, UintSlot, ValueMut, ValueRef};
pub use sequence::Sequence;
