use std::path::PathBuf;

use color_eyre::Result;
use engine::{
    ImgModBox,
    config::{Config, save_config},
    image_model::{HuggingFace, Model},
    session::Session,
    size::ImageSize,
    style::Style,
};
use iced::{Task, widget::image::Handle as ImgHandle};
use log::debug;

use crate::message::{ContextMessage, Message};

/// State shared by all screens.
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    pub session: Session,
    pub image_model: ImgModBox,
    pub image_handle: Option<ImgHandle>,
    pub last_saved: Option<PathBuf>,
}

impl Context {
    pub fn new(config: Config, config_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            session: Session::new(config.credential()),
            image_model: Box::new(HuggingFace::new(config.credential())),
            config,
            config_path,
            output_dir,
            image_handle: None,
            last_saved: None,
        }
    }

    /// Stores the new key in the config file and uses it for the next generation.
    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.config.api_key = key;
        self.session.set_credential(self.config.credential());
        self.image_model = Box::new(HuggingFace::new(self.config.credential()));
        save_config(&self.config_path, &self.config)?;
        debug!("Updated config at {:?}", self.config_path);
        Ok(())
    }

    /// Starts a generation in the background. The result comes back as
    /// [`ContextMessage::ImageReady`].
    pub fn generate(
        &mut self,
        prompt: &str,
        style: Style,
        size: ImageSize,
        model: Model,
    ) -> Result<Task<Message>> {
        let request = self.session.start(prompt, style, size, model)?;
        let image_model = self.image_model.clone();
        debug!("Spawning generation for {:?}", request.final_prompt());

        Ok(Task::perform(
            async move { image_model.get_image(&request).await },
            |res| ContextMessage::ImageReady(res).into(),
        ))
    }

    pub fn update(&mut self, message: ContextMessage) -> Result<Task<Message>> {
        use ContextMessage::*;
        match message {
            ImageReady(result) => {
                let image = self.session.finish(result)?;
                self.image_handle = Some(ImgHandle::from_bytes(image.data.clone()));
                self.last_saved = None;
                Ok(Task::none())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use engine::{
        config::load_config,
        generation::{GeneratedImage, GenerationError},
        session::Status,
    };
    use tempfile::TempDir;

    use super::*;

    pub(crate) fn context(dir: &TempDir, api_key: &str) -> Context {
        Context::new(
            Config {
                api_key: api_key.into(),
            },
            dir.path().join("config.json"),
            dir.path().join("outputs"),
        )
    }

    pub(crate) fn generated_image(prompt: &str) -> GeneratedImage {
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::new_rgb8(4, 3)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        GeneratedImage::decode(buf.into_inner().into(), prompt.into()).unwrap()
    }

    fn start(ctx: &mut Context) {
        ctx.generate("a cat", Style::Anime, ImageSize::Square512, Model::default())
            .unwrap();
        assert_eq!(ctx.session.status(), Status::AwaitingResponse);
    }

    #[test]
    fn image_ready_shows_the_new_image() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = context(&dir, "hf_x");
        ctx.last_saved = Some(dir.path().join("outputs/old.png"));
        start(&mut ctx);

        ctx.update(ContextMessage::ImageReady(Ok(generated_image("a cat"))))?;

        assert!(ctx.image_handle.is_some());
        assert_eq!(ctx.last_saved, None);
        assert_eq!(ctx.session.status(), Status::Idle);
        assert_eq!(ctx.session.last_image().unwrap().prompt, "a cat");
        Ok(())
    }

    #[test]
    fn failed_generation_returns_to_idle_and_reports() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = context(&dir, "hf_x");
        start(&mut ctx);

        let api_error = GenerationError::Api {
            status: 503,
            body: "server busy".into(),
        };
        let err = ctx
            .update(ContextMessage::ImageReady(Err(api_error.clone())))
            .err()
            .unwrap();

        assert_eq!(err.downcast_ref::<GenerationError>(), Some(&api_error));
        assert_eq!(ctx.session.status(), Status::Idle);
        assert!(ctx.image_handle.is_none());
        Ok(())
    }

    #[test]
    fn new_key_is_saved_and_used() -> Result<()> {
        let dir = TempDir::new()?;
        let mut ctx = context(&dir, "");
        assert!(
            ctx.generate("a cat", Style::Anime, ImageSize::Square512, Model::default())
                .is_err()
        );

        ctx.set_api_key("hf_new".into())?;

        assert_eq!(load_config(&ctx.config_path)?.unwrap().api_key, "hf_new");
        start(&mut ctx);
        Ok(())
    }
}
