//! Verlauf der ausgeführten Commands für Diagnose und Tests.

use std::collections::VecDeque;

use super::AppCommand;

/// Kapazität des Verlaufs; älteste Einträge fallen zuerst heraus.
const CAPACITY: usize = 1000;

/// Ringpuffer über die zuletzt ausgeführten Commands.
///
/// Der Verlauf ist reine Beobachtung: er wird vom Controller vor der
/// Ausführung befüllt und nie zur Steuerung gelesen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(CAPACITY),
        }
    }

    /// Hängt einen Command an; bei voller Kapazität fällt der älteste weg.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    /// Anzahl der Einträge im Verlauf.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn der Verlauf leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Iteriert vom ältesten zum neuesten Eintrag.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
