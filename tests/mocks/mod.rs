mod mock_input_source;
mod mock_output_sink;

#[allow(unused_imports)]
pub use mock_input_source::MockInputSource;
#[allow(unused_imports)]
pub use mock_output_sink::MockOutputSink;
