/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Drawer {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerAction {
    /// Hamburger button clicked.
    Toggle,
    /// A navigation link was followed.
    Close,
}

impl Drawer {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn apply(self, action: DrawerAction) -> Self {
        match action {
            DrawerAction::Toggle => Self { open: !self.open },
            DrawerAction::Close => Self { open: false },
        }
    }
}
