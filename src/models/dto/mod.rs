pub mod completion;

pub use completion::{ChatCompletionRequestDto, ChatCompletionResponseDto};
