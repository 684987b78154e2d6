use std::{fmt, path::PathBuf};

use color_eyre::{Result, eyre::WrapErr as _};
use engine::config::Config;
use iced::{
    Element, Font, Length, Task,
    font::{self},
    padding,
    widget::{container, scrollable, text},
};

use crate::{
    message::Message,
    state::{Generator, Modal, State, StateExt},
};

pub mod cli;
pub mod context;
pub mod message;
pub mod state;

pub use context::Context;

pub const APP_TITLE: &str = "AI Image Generator";

pub struct Gui {
    state: Box<dyn State>,
    ctx: Context,
}

impl Gui {
    pub fn new(mb_config: Option<Config>, config_path: PathBuf, output_dir: PathBuf) -> Self {
        let ctx = Context::new(mb_config.clone().unwrap_or_default(), config_path, output_dir);
        if mb_config.is_some() {
            Gui {
                state: Generator::new().boxed(),
                ctx,
            }
        } else {
            Gui {
                state: Modal::message(
                    Generator::new().boxed(),
                    "Welcome",
                    indoc::indoc! {"
                    Hi, since this is your first time starting the generator, please enter your
                    Hugging Face API key at the top of the window. It is stored locally and
                    only ever sent to the inference endpoint.
                    "
                    },
                )
                .boxed(),
                ctx,
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match self.try_update(message) {
            Ok(task) => task,
            Err(e) => {
                self.state = Modal::message(self.state.clone(), "Error", format!("{e:#}")).boxed();
                Task::none()
            }
        }
    }

    fn try_update(&mut self, message: Message) -> Result<Task<Message>> {
        match message {
            Message::Ui(ui_message) => {
                let cmd = self.state.update(ui_message, &mut self.ctx)?;
                if let Some(new_state) = cmd.transition {
                    self.state = new_state;
                }
                Ok(cmd.task.unwrap_or(Task::none()))
            }
            Message::Context(context_message) => self.ctx.update(context_message),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.state.view(&self.ctx).map(|m| m.into())
    }
}

macro_rules! elem_list {
    ($($elems:expr),+ $(,)?) => {
        [$(iced::Element::from($elems)),*]
    };
}
pub(crate) use elem_list;

fn italic_text(t: &str) -> iced::widget::Text<'_> {
    iced::widget::text(t).font(Font {
        style: font::Style::Italic,
        ..Font::DEFAULT
    })
}

fn bold_text<'a>(t: impl text::IntoFragment<'a>) -> iced::widget::Text<'a> {
    iced::widget::text(t).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    })
}

fn top_level_container<'a, T: Send + 'static>(
    elem: impl Into<Element<'a, T>>,
) -> container::Container<'a, T> {
    container(
        container(scrollable(
            container(elem).padding(padding::all(10).right(20)),
        ))
        .padding(20)
        .max_width(900),
    )
    .center(Length::Fill)
}

pub trait TryIntoExt<T> {
    fn try_into_ex(self) -> Result<T>;
}

impl<T, Target, E> TryIntoExt<Target> for T
where
    T: TryInto<Target, Error = E>,
    T: fmt::Debug,
    T: Clone,
    E: std::error::Error + Send + Sync + 'static,
{
    fn try_into_ex(self) -> Result<Target> {
        self.clone()
            .try_into()
            .with_context(|| format!("{self:#?}"))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use engine::generation::GenerationError;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        context::tests::generated_image,
        message::{ContextMessage, ui_messages},
    };

    fn gui(dir: &TempDir) -> Gui {
        Gui::new(
            Some(Config {
                api_key: "hf_x".into(),
            }),
            dir.path().join("config.json"),
            dir.path().join("outputs"),
        )
    }

    #[test]
    fn generation_error_opens_a_dialog() -> Result<()> {
        let dir = TempDir::new()?;
        let mut gui = gui(&dir);

        let _ = gui.update(Message::Context(ContextMessage::ImageReady(Err(
            GenerationError::Api {
                status: 503,
                body: "server busy".into(),
            },
        ))));

        let shown = format!("{:?}", gui.state);
        assert!(shown.contains("Error"), "{shown}");
        assert!(shown.contains("server busy"), "{shown}");
        Ok(())
    }

    #[test]
    fn dialog_shows_the_whole_error_chain() -> Result<()> {
        let dir = TempDir::new()?;
        let mut gui = gui(&dir);
        // a file where the output directory should be
        fs::write(dir.path().join("outputs"), b"")?;
        gui.ctx
            .update(ContextMessage::ImageReady(Ok(generated_image("x"))))?;

        let _ = gui.update(Message::Ui(ui_messages::Generator::Save.into()));

        let shown = format!("{:?}", gui.state);
        assert!(shown.contains("Couldn't create"), "{shown}");
        assert!(shown.contains("os error"), "{shown}");
        Ok(())
    }
}
