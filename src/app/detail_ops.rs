use log::debug;

use super::App;

const SKIP_CLIPBOARD_ENV: &str = "FOLIO_SKIP_CLIPBOARD";

impl App {
    /// Opens the project under the project cursor in the detail view.
    pub fn open_current_project(&mut self) {
        let Some(id) = self.current_project().map(|p| p.id.clone()) else {
            return;
        };
        if self.detail.select(&id) {
            debug!("event=detail_opened project={id}");
            self.detail_scroll = 0;
        }
    }

    pub fn dismiss_detail(&mut self) {
        if self.detail.dismiss() {
            debug!("event=detail_dismissed");
            self.detail_scroll = 0;
        }
    }

    /// Replaces the open project with its neighbour in the visible list.
    /// If the open project is no longer visible, the first visible project is opened.
    pub fn step_detail(&mut self, forward: bool) {
        if self.visible.is_empty() {
            return;
        }
        let current = self
            .detail
            .open_id()
            .and_then(|id| self.catalog.position(id))
            .and_then(|index| self.visible.iter().position(|&v| v == index));

        let target = match current {
            Some(pos) if forward => (pos + 1).min(self.visible.len() - 1),
            Some(pos) => pos.saturating_sub(1),
            None => 0,
        };

        self.project_cursor = target;
        let id = self.catalog.projects()[self.visible[target]].id.clone();
        if self.detail.select(&id) {
            debug!("event=detail_stepped project={id}");
            self.detail_scroll = 0;
        }
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll += 1;
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Copies the `number`-th present link (1-based, as numbered in the detail view).
    pub fn copy_link(&mut self, number: usize) {
        let Some(project) = self.open_project() else {
            return;
        };
        let link = number
            .checked_sub(1)
            .and_then(|i| project.details.links.present().nth(i))
            .map(|(kind, uri)| (kind.label(), uri.to_string()));
        let Some((label, uri)) = link else {
            self.set_status(format!("No link {number}"));
            return;
        };

        match Self::copy_to_clipboard(&uri) {
            Ok(()) => {
                self.set_status(format!("Copied {label} link"));
                self.last_copied = Some(uri);
            }
            Err(e) => self.set_status(format!("Failed to copy: {e}")),
        }
    }

    fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
        if std::env::var_os(SKIP_CLIPBOARD_ENV).is_some() {
            return Ok(());
        }
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
