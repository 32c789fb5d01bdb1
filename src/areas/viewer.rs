use crate::areas::config::ViewConfig;
use crate::areas::session::Session;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Front-end state the commands run against: where output goes, how it is
/// laid out, where inputs are read from and the texts being compared.
pub struct Viewer {
    writer: RefCell<Box<dyn std::io::Write>>,
    config: ViewConfig,
    workspace: Workspace,
    session: RefCell<Session>,
}

impl Viewer {
    pub fn new(
        path: &Path,
        config: ViewConfig,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let session = Session::new(config.algorithm);

        Ok(Viewer {
            writer: RefCell::new(writer),
            config,
            workspace: Workspace::new(path.into()),
            session: RefCell::new(session),
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn session(&'_ self) -> RefMut<'_, Session> {
        self.session.borrow_mut()
    }
}
