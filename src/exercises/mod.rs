/*! Exercise shortcuts

Ready-made answers to the notebook exercises.
They are deliberately simple: the first matching line of a file is enough to select it,
and resources are paired on their file names only.
!*/
mod align;
mod filter;
mod resources;

pub use align::align_resources;
pub use filter::filter_by_date_and_content;
pub use resources::{liner_output_files_ch3, spellchecked_resources_ch3, spellchecked_resources_ex3};
