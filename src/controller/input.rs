//! Key and paste event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Route};
use super::{AppController, LinkKind};

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Ctrl+C / Ctrl+Q always quit, even while typing
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter => {
                    model.clear_error().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        let ui_state = model.get_ui_state().await;

        // Landing page: only "start now" and global keys
        if ui_state.route == Route::Landing && key.code == KeyCode::Enter {
            drop(model);
            self.navigate_to(Route::Home).await;
            return Ok(());
        }

        // Handle search input when in search section
        if ui_state.route == Route::Home && ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    model.cycle_section_forward().await;
                    return Ok(());
                }
                KeyCode::BackTab => {
                    model.cycle_section_backward().await;
                    return Ok(());
                }
                KeyCode::Enter | KeyCode::Down => {
                    model.set_active_section(ActiveSection::Results).await;
                    return Ok(());
                }
                KeyCode::Esc => {
                    let input = model.update_search_input(String::new()).await;
                    drop(model);
                    self.on_search_input_changed(&input).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    let input = model.backspace_search().await;
                    drop(model);
                    self.on_search_input_changed(&input).await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    let input = model.append_to_search(c).await;
                    drop(model);
                    self.on_search_input_changed(&input).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle result list navigation
        if let (Some(screen), ActiveSection::Results) = (ui_state.route.screen(), ui_state.active_section) {
            match key.code {
                KeyCode::Up => {
                    model.screen_move_up(screen).await;
                    return Ok(());
                }
                KeyCode::Down => {
                    model.screen_move_down(screen).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    self.pick_item(screen).await;
                    return Ok(());
                }
                KeyCode::Char('z') | KeyCode::Char('Z') => {
                    drop(model);
                    self.show_quiz(screen).await;
                    return Ok(());
                }
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    drop(model);
                    self.create_flashcards(screen).await;
                    return Ok(());
                }
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    drop(model);
                    self.open_link(screen, LinkKind::Preview).await;
                    return Ok(());
                }
                KeyCode::Char('b') | KeyCode::Char('B') => {
                    drop(model);
                    self.open_link(screen, LinkKind::Buy).await;
                    return Ok(());
                }
                KeyCode::Char('i') | KeyCode::Char('I') => {
                    drop(model);
                    self.open_link(screen, LinkKind::Info).await;
                    return Ok(());
                }
                KeyCode::Char('v') | KeyCode::Char('V') => {
                    drop(model);
                    self.open_link(screen, LinkKind::Viewer).await;
                    return Ok(());
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    drop(model);
                    self.reload(screen).await;
                    return Ok(());
                }
                KeyCode::Char('/') if ui_state.route == Route::Home => {
                    model.set_active_section(ActiveSection::Search).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Handle drop zone
        if ui_state.route == Route::Home && ui_state.active_section == ActiveSection::DropZone {
            if let KeyCode::Delete | KeyCode::Backspace = key.code {
                model.clear_dropped_files().await;
                return Ok(());
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                model.cycle_section_forward().await;
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            KeyCode::Char('1') => {
                drop(model);
                self.navigate_to(Route::Landing).await;
            }
            KeyCode::Char('2') => {
                drop(model);
                self.navigate_to(Route::Home).await;
            }
            KeyCode::Char('3') => {
                drop(model);
                self.navigate_to(Route::Categories).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// Pasted text goes to the search bar while it has focus, otherwise it is
    /// treated as files dropped onto the home screen.
    pub async fn handle_paste(&self, text: &str) {
        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;
        if ui_state.route != Route::Home {
            return;
        }

        if ui_state.active_section == ActiveSection::Search {
            let input = model.append_str_to_search(text).await;
            drop(model);
            self.on_search_input_changed(&input).await;
        } else {
            drop(model);
            self.drop_files(text).await;
        }
    }
}
