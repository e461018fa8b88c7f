use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read input line {line}: {source}")]
    ReadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
