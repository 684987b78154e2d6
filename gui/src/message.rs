use derive_more::{From, TryInto};
use engine::generation::{GeneratedImage, GenerationError};

#[derive(Debug, Clone, From)]
pub enum Message {
    Ui(UiMessage),
    Context(ContextMessage),
}

#[derive(Debug, Clone, From, TryInto)]
pub enum UiMessage {
    Generator(ui_messages::Generator),
    MessageDialog(ui_messages::MessageDialog),
}

#[derive(Debug, Clone)]
pub enum ContextMessage {
    ImageReady(Result<GeneratedImage, GenerationError>),
}

pub mod ui_messages {
    use engine::{image_model::Model, size::ImageSize, style::Style};

    #[derive(Debug, Clone)]
    pub enum Generator {
        ApiKeyChanged(String),
        PromptChanged(String),
        StyleSelected(Style),
        SizeSelected(ImageSize),
        ModelSelected(Model),
        Generate,
        Save,
    }

    #[derive(Debug, Clone)]
    pub enum MessageDialog {
        Confirm,
    }
}
