pub mod options;
pub mod state;
pub mod value;

pub use options::{
    NameLabelPair, OptionEntry, OptionGroup, RenderableEntry, flatten, is_option_group_array,
};
pub use state::{EditorState, EditorValue, FieldData, ValueEditorType};
pub use value::{RangeValue, to_array};
