use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use super::state::BrowseOutcome;

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user leaves.
	///
	/// Load completion and key presses are handled on this thread only.
	pub fn run(&mut self) -> Result<BrowseOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<BrowseOutcome> = 'event_loop: loop {
			self.pump_load();
			if self.show_logs {
				crate::logging::pump();
			}
			if self.session.load_state().is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(Ok(outcome));
							break;
						}
						Ok(None) => {}
						Err(err) => {
							maybe_outcome = Some(Err(err));
							break;
						}
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break outcome;
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
