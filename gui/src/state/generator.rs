use color_eyre::{Result, eyre::eyre};
use engine::{image_model::Model, output::save_image, size::ImageSize, style::Style};
use iced::{
    Length,
    widget::{self, button, column, pick_list, row, space, text, text_input},
};
use log::debug;
use strum::IntoEnumIterator;

use crate::{
    Context, TryIntoExt, bold_text, elem_list, italic_text,
    message::{UiMessage, ui_messages::Generator as MyMessage},
    state::{State, StateCommand, cmd},
    top_level_container,
};

/// The main screen: settings and prompt on top, the last image below.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    prompt: String,
    style: Style,
    size: ImageSize,
    model: Model,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl State for Generator {
    fn update(&mut self, event: UiMessage, ctx: &mut Context) -> Result<StateCommand> {
        use MyMessage::*;
        match event.try_into_ex()? {
            ApiKeyChanged(key) => {
                ctx.set_api_key(key)?;
                cmd::none()
            }
            PromptChanged(prompt) => {
                self.prompt = prompt;
                cmd::none()
            }
            StyleSelected(style) => {
                self.style = style;
                cmd::none()
            }
            SizeSelected(size) => {
                self.size = size;
                cmd::none()
            }
            ModelSelected(model) => {
                self.model = model;
                cmd::none()
            }
            Generate => cmd::task(ctx.generate(&self.prompt, self.style, self.size, self.model)?),
            Save => {
                let image = ctx
                    .session
                    .last_image()
                    .ok_or(eyre!("There is no image to save yet"))?;
                let path = save_image(image, &ctx.output_dir)?;
                debug!("Saved {:?}", path);
                ctx.last_saved = Some(path);
                cmd::none()
            }
        }
    }

    fn view<'a>(&'a self, ctx: &'a Context) -> iced::Element<'a, UiMessage> {
        let busy = ctx.session.is_busy();

        let mut prompt_input: widget::TextInput<'a, UiMessage> =
            text_input("Describe the image you want", &self.prompt)
                .on_input(|s| MyMessage::PromptChanged(s).into())
                .width(Length::Fill);
        if !busy {
            prompt_input = prompt_input.on_submit(MyMessage::Generate.into());
        }

        let mut items = Vec::from(elem_list![
            bold_text("AI Image Generator").size(24),
            space().height(10),
            text("Hugging Face API Key"),
            text_input("hf_...", &ctx.config.api_key)
                .secure(true)
                .on_input(|s| MyMessage::ApiKeyChanged(s).into())
                .width(Length::Fill),
            text("Prompt"),
            prompt_input,
            row![
                column![
                    text("Style"),
                    pick_list(Style::iter().collect::<Vec<_>>(), Some(self.style), |s| {
                        MyMessage::StyleSelected(s).into()
                    }),
                ]
                .spacing(5),
                column![
                    text("Image Size"),
                    pick_list(ImageSize::iter().collect::<Vec<_>>(), Some(self.size), |s| {
                        MyMessage::SizeSelected(s).into()
                    }),
                ]
                .spacing(5),
                column![
                    text("Model"),
                    pick_list(Model::iter().collect::<Vec<_>>(), Some(self.model), |m| {
                        MyMessage::ModelSelected(m).into()
                    }),
                ]
                .spacing(5),
            ]
            .spacing(20),
            button("Generate Image").on_press_maybe((!busy).then(|| MyMessage::Generate.into())),
        ]);

        if busy {
            items.push(italic_text("Generating image...").into());
        }

        if let (Some(handle), Some(image)) = (&ctx.image_handle, ctx.session.last_image()) {
            items.push(space().height(20).into());
            items.push(
                widget::container(widget::image(handle).width(Length::Fill))
                    .max_width(image.width() as f32)
                    .into(),
            );
            items.push(italic_text(&image.prompt).into());
            items.push(button("Save Image").on_press(MyMessage::Save.into()).into());
            if let Some(path) = &ctx.last_saved {
                items.push(text(format!("Image saved to: {}", path.display())).into());
            }
        }

        top_level_container(column(items).spacing(12).width(Length::Fill)).into()
    }

    fn clone(&self) -> Box<dyn State> {
        Box::new(Clone::clone(self))
    }
}
