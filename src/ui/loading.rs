use super::App;
use crate::directory::PendingLoad;

impl<'a> App<'a> {
	pub(crate) fn set_pending_load(&mut self, pending: PendingLoad) {
		self.pending = Some(pending);
	}

	/// Apply the fetch outcome once it arrives. Returns `true` on the tick the
	/// load state settled.
	pub(crate) fn pump_load(&mut self) -> bool {
		let Some(outcome) = self.pending.as_ref().and_then(PendingLoad::poll) else {
			return false;
		};
		self.pending = None;

		let applied = self.session.apply_load(outcome);
		if applied {
			self.sync_query();
		}
		applied
	}
}
