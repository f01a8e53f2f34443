use tapmark::PermissionCapability;

/// Permission system backed by an in-app dialog. A request stays pending
/// until the user answers it; only one request is tracked at a time.
#[derive(Debug, Clone, Default)]
pub struct DialogPermissions {
    granted: bool,
    pending: Option<String>,
}

impl DialogPermissions {
    pub fn new(pre_granted: bool) -> Self {
        Self {
            granted: pre_granted,
            pending: None,
        }
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Shows the dialog while a request is pending. Returns the user's
    /// answer on the frame it is given.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<bool> {
        let permission = self.pending.clone()?;
        let mut answer = None;

        egui::Window::new("Location permission")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Allow this app to access the device location?");
                ui.small(&permission);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Allow").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Deny").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(granted) = answer {
            self.pending = None;
            self.granted = granted;
            log::info!("User answered {} for {}", granted, permission);
        }
        answer
    }
}

impl PermissionCapability for DialogPermissions {
    fn check_granted(&self, _permission: &str) -> bool {
        self.granted
    }

    fn request(&mut self, permission: &str) {
        if self.pending.is_some() {
            log::debug!("Permission request already pending");
            return;
        }
        self.pending = Some(permission.to_string());
    }
}
