mod file_input_source;
mod file_output_sink;
mod traits;

pub use file_input_source::FileInputSource;
pub use file_output_sink::FileOutputSink;
pub use traits::{InputKind, InputSource, OutputSink};
