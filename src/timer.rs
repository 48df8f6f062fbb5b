//! Wall-clock timing of the phases of one run.

use std::time::{Duration, Instant};

use log::{debug, info};

/// Records how long each named phase took, in the order the phases ran.
#[derive(Debug)]
pub struct PhaseTimer {
    started: Instant,
    phases: Vec<(&'static str, Duration)>,
}

impl PhaseTimer {
    pub fn start() -> PhaseTimer {
        PhaseTimer { started: Instant::now(), phases: Vec::new() }
    }

    /// Runs `func` as phase `phase` and returns its result.
    pub fn time<T, F: FnOnce() -> T>(&mut self, phase: &'static str, func: F) -> T {
        let timer = Instant::now();
        let result = func();
        let took = timer.elapsed();
        debug!("{} took {:?}", phase, took);
        self.phases.push((phase, took));
        result
    }

    pub fn phases(&self) -> &[(&'static str, Duration)] {
        &self.phases
    }

    /// Time since the timer started, including anything between phases.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// One line per phase, then the total.
    pub fn summary(&self) -> Vec<String> {
        let width = self.phases.iter().map(|(phase, _)| phase.len()).max().unwrap_or(0).max(5);
        self.phases
            .iter()
            .map(|(phase, took)| (*phase, *took))
            .chain(std::iter::once(("Total", self.elapsed())))
            .map(|(phase, took)| format!("{:<w$} {:>15}", phase, format!("{:?}", took), w = width))
            .collect()
    }

    pub fn report(&self) {
        for line in self.summary() {
            info!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_closure_result() {
        let mut timer = PhaseTimer::start();
        let value = timer.time("Sum", || (1..=10).sum::<u32>());
        assert_eq!(value, 55);
    }

    #[test]
    fn phases_are_recorded_in_order() {
        let mut timer = PhaseTimer::start();
        timer.time("Loading", || ());
        timer.time("Johnson", || std::thread::sleep(Duration::from_millis(2)));
        let names: Vec<_> = timer.phases().iter().map(|(phase, _)| *phase).collect();
        assert_eq!(names, vec!["Loading", "Johnson"]);
        assert!(timer.phases()[1].1 >= Duration::from_millis(2));
        let recorded: Duration = timer.phases().iter().map(|(_, took)| *took).sum();
        assert!(timer.elapsed() >= recorded);
    }

    #[test]
    fn summary_ends_with_the_total() {
        let mut timer = PhaseTimer::start();
        timer.time("Check", || ());
        let lines = timer.summary();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Check "));
        assert!(lines[1].starts_with("Total "));
        assert!(PhaseTimer::start().summary()[0].starts_with("Total"));
    }
}
