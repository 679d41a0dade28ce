//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Initial load
        let cmd = self.state.initialize();
        let _ = self.network_tx.send(cmd);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Table navigation
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Directory actions
            UiEvent::AddUser => {
                let cmd = self.state.add_user();
                let _ = self.network_tx.send(cmd);
            }
            UiEvent::DeleteSelected => self.state.delete_selected(),
            UiEvent::EditSelected => self.state.edit_selected(),
            UiEvent::CancelFetches => {
                for cmd in self.state.cancel_fetches() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Edit dialog
            UiEvent::DialogChar(c) => self.state.dialog_char(c),
            UiEvent::DialogBackspace => self.state.dialog_backspace(),
            UiEvent::DialogCursorLeft => self.state.dialog_cursor_left(),
            UiEvent::DialogCursorRight => self.state.dialog_cursor_right(),
            UiEvent::DialogNextField => self.state.dialog_next_field(),
            UiEvent::DialogPrevField => self.state.dialog_prev_field(),
            UiEvent::SaveEdit => self.state.save_edit(),
            UiEvent::CancelEdit => self.state.cancel_edit(),

            // Shell
            UiEvent::ToggleTheme => self.state.toggle_theme(),
            UiEvent::ToggleDrawer => self.state.toggle_drawer(),
            UiEvent::CloseDrawer => self.state.close_drawer(),
            UiEvent::DismissNotification => self.state.dismiss_notification(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::theme::ThemeMode;

    #[tokio::test]
    async fn test_actor_loads_adds_and_quits() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(AppState::new(ThemeMode::Dark, 2), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        // Startup fetch goes out first
        let first = net_cmd_rx.recv().await.unwrap();
        assert_eq!(first, NetworkCommand::FetchUsers { id: 1, count: 2 });
        assert!(render_rx.recv().await.unwrap().is_loading());

        let users = vec![User::new("A", "B", "C", "female"), User::new("D", "E", "F", "male")];
        net_resp_tx.send(NetworkResponse::Users { id: 1, users, time_ms: 5 }).unwrap();
        let render = render_rx.recv().await.unwrap();
        assert_eq!(render.users.len(), 2);
        assert!(!render.is_loading());

        ui_tx.send(UiEvent::AddUser).unwrap();
        assert_eq!(
            net_cmd_rx.recv().await.unwrap(),
            NetworkCommand::FetchUsers { id: 2, count: 1 }
        );

        ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(net_cmd_rx.recv().await.unwrap(), NetworkCommand::Shutdown);
        handle.await.unwrap();
    }
}
