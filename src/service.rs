use std::collections::HashMap;

use serde_json::Value;

use crate::aliases::Aliases;
use crate::compose::Composer;
use crate::dispatch::Publish;
use crate::error::Error;
use crate::event::{MailEvent, MessageNotSent, MessageSent};
use crate::flash::FlashConfig;
use crate::message::Message;
use crate::transport::Transport;
use crate::upload::{UploadStatus, UploadedFile};

/// Everything needed for one send: addressing, view selection, template
/// parameters, and candidate attachments. Lives for a single `run` call.
#[derive(Debug)]
pub struct SendRequest {
    pub from: String,
    pub to: String,
    pub subject: String,

    /// Symbolic template root, e.g. `@mail`
    pub view_path: String,

    /// View kind -> template name, e.g. `html -> contact`
    pub layout: HashMap<String, String>,

    /// Template parameters, exposed to views under the `params` key
    pub params: Value,

    /// Groups of uploaded files offered for attachment
    pub attach_files: Vec<Vec<UploadedFile>>,
}

impl SendRequest {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        view_path: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            view_path: view_path.into(),
            layout: HashMap::new(),
            params: Value::Object(Default::default()),
            attach_files: Vec::new(),
        }
    }

    /// Select a template for a view kind (`html` or `text`).
    pub fn layout(mut self, kind: impl Into<String>, template: impl Into<String>) -> Self {
        self.layout.insert(kind.into(), template.into());
        self
    }

    pub fn params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }

    /// Add one group of uploaded files.
    pub fn attach(mut self, files: Vec<UploadedFile>) -> Self {
        self.attach_files.push(files);
        self
    }
}

/// Orchestrates one send: resolve the view path, compose the message,
/// attach valid uploads, hand off to the transport, and report the outcome.
///
/// Without a publisher this is the minimal, log-only service; with one it
/// also dispatches `MessageSent`/`MessageNotSent` events carrying the
/// configured flash presentation.
pub struct MailerService {
    aliases: Aliases,
    composer: Box<dyn Composer>,
    transport: Box<dyn Transport>,
    dispatcher: Option<Box<dyn Publish>>,
    flash: FlashConfig,
}

impl MailerService {
    pub fn new(
        aliases: Aliases,
        composer: Box<dyn Composer>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            aliases,
            composer,
            transport,
            dispatcher: None,
            flash: FlashConfig::default(),
        }
    }

    /// Attach an event publisher. Send outcomes are then dispatched as
    /// events in addition to being logged.
    pub fn with_dispatcher(mut self, dispatcher: Box<dyn Publish>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Replace the default flash presentation.
    pub fn with_flash(mut self, flash: FlashConfig) -> Self {
        self.flash = flash;
        self
    }

    /// Compose and send one message.
    ///
    /// Returns `Ok(true)` iff the transport accepted the message. Delivery
    /// failures never surface as `Err`; they are logged, published as a
    /// `MessageNotSent` event, and collapsed into `Ok(false)`. `Err` is
    /// reserved for caller errors: an unknown view alias, a template that
    /// does not load or render, or an unreadable upload stream.
    pub fn run(&self, request: SendRequest) -> Result<bool, Error> {
        // 1. Resolve the symbolic view path to a template root
        let view_path = self.aliases.resolve(&request.view_path)?;

        // 2. Render the message content and address it
        let mut message = self
            .composer
            .compose(&view_path, &request.layout, &request.params)?;
        message
            .set_from(request.from)
            .set_subject(request.subject)
            .set_to(request.to);

        // 3. Attach every cleanly uploaded file, in input order
        for group in request.attach_files {
            for mut file in group {
                if file.status != UploadStatus::Ok {
                    continue;
                }

                let data = file.read_all().map_err(|e| Error::Upload(e.to_string()))?;
                message.attach_content(data, file.file_name, file.content_type);
            }
        }

        // 4. Hand off to the transport
        Ok(self.send(&message))
    }

    fn send(&self, message: &Message) -> bool {
        match self.transport.send(message) {
            Ok(()) => {
                if let Some(dispatcher) = &self.dispatcher {
                    dispatcher.publish(MailEvent::Sent(MessageSent::new(
                        self.flash.kind_sent.clone(),
                        self.flash.header.clone(),
                        self.flash.body.clone(),
                        self.flash.add_flash,
                    )));
                }
                true
            }
            Err(err) => {
                let reason = err.to_string();
                log::error!("{}", reason);

                if let Some(dispatcher) = &self.dispatcher {
                    dispatcher.publish(MailEvent::NotSent(MessageNotSent::new(
                        self.flash.kind_not_sent.clone(),
                        self.flash.header.clone(),
                        reason,
                        self.flash.add_flash,
                    )));
                }
                false
            }
        }
    }
}
