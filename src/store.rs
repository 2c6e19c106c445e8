use std::sync::mpsc;

use crate::annotation::{DayAnnotator, DayCellFacts, Holiday, LeaveRecord, MonthMatch};
use crate::clock::{Clock, SystemClock};
use crate::date::CalendarDate;
use crate::error::Result;
use crate::grid::{self, DisplayWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    ReferenceChanged(CalendarDate),
    TodayChanged(CalendarDate),
    GridRebuilt,
}

/// Observable owner of the displayed month.
///
/// Holds the reference date and the annotation lists and keeps the 42 cell
/// facts in sync with them. Every rebuild is announced to all subscribers.
pub struct CalendarStore<C: Clock = SystemClock> {
    clock: C,
    month_match: MonthMatch,
    holidays: Vec<Holiday>,
    leaves: Vec<LeaveRecord>,
    today: CalendarDate,
    window: DisplayWindow,
    cells: Vec<DayCellFacts>,
    subscribers: Vec<mpsc::Sender<StoreEvent>>,
}

impl<C: Clock> CalendarStore<C> {
    pub fn new(
        reference: CalendarDate,
        holidays: Vec<Holiday>,
        leaves: Vec<LeaveRecord>,
        month_match: MonthMatch,
        clock: C,
    ) -> Result<Self> {
        let today = clock.today();
        let window = grid::build(reference)?;
        let cells =
            DayAnnotator::new(&holidays, &leaves, today, month_match).annotate_window(&window);

        Ok(CalendarStore {
            clock,
            month_match,
            holidays,
            leaves,
            today,
            window,
            cells,
            subscribers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn reference(&self) -> CalendarDate {
        self.window.reference()
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn window(&self) -> &DisplayWindow {
        &self.window
    }

    pub fn cells(&self) -> &[DayCellFacts] {
        &self.cells
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn leaves(&self) -> &[LeaveRecord] {
        &self.leaves
    }

    pub fn title(&self) -> String {
        self.window.title()
    }

    /// Moves the view to `reference`.
    ///
    /// On error the store keeps showing the previous month.
    pub fn set_reference(&mut self, reference: CalendarDate) -> Result<()> {
        if reference == self.window.reference() {
            return Ok(());
        }

        let window = grid::build(reference)?;
        self.window = window;
        self.rebuild_cells();

        self.notify(StoreEvent::ReferenceChanged(reference));
        self.notify(StoreEvent::GridRebuilt);
        Ok(())
    }

    /// Re-reads the clock. Returns whether the day changed.
    pub fn refresh_today(&mut self) -> bool {
        let today = self.clock.today();
        if today == self.today {
            return false;
        }

        log::info!("Day changed from {} to {}", self.today, today);
        self.today = today;
        self.rebuild_cells();

        self.notify(StoreEvent::TodayChanged(today));
        self.notify(StoreEvent::GridRebuilt);
        true
    }

    fn rebuild_cells(&mut self) {
        self.cells = DayAnnotator::new(&self.holidays, &self.leaves, self.today, self.month_match)
            .annotate_window(&self.window);
    }

    fn notify(&mut self, event: StoreEvent) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            log::warn!("Dropped {} disconnected subscriber(s)", dropped);
        }
    }
}
