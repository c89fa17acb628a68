//! Snapshot-basiertes Undo/Redo auf Host-Seite.
//!
//! Die Kurve selbst kennt keine Historie: der Host nimmt vor jedem mutierenden
//! Aufruf einen unveränderlichen Snapshot auf und spielt ihn bei Undo zurück.

use crate::core::Curve;
use std::collections::VecDeque;
use std::sync::Arc;

/// Unveränderlicher Kurvenzustand zum Zeitpunkt der Aufnahme.
///
/// Arc-Klon: Weitergeben und Stapeln ist O(1), nur die Aufnahme kopiert die Punkte.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSnapshot {
    curve: Arc<Curve>,
}

impl CurveSnapshot {
    /// Nimmt den aktuellen Zustand auf.
    pub fn capture(curve: &Curve) -> Self {
        Self {
            curve: Arc::new(curve.clone()),
        }
    }

    /// Read-only Sicht auf den gespeicherten Zustand.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, curve: &mut Curve) {
        *curve = Arc::unwrap_or_clone(self.curve);
    }
}

/// Begrenzter Stapel von Snapshots: überschreitet er `depth`, fällt der
/// älteste Eintrag vorne heraus.
#[derive(Debug, Default)]
struct SnapshotStack {
    entries: VecDeque<CurveSnapshot>,
    depth: usize,
}

impl SnapshotStack {
    fn with_depth(depth: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(depth),
            depth,
        }
    }

    fn push(&mut self, snapshot: CurveSnapshot) {
        if self.depth == 0 {
            return;
        }
        if self.entries.len() == self.depth {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    fn pop(&mut self) -> Option<CurveSnapshot> {
        self.entries.pop_back()
    }
}

/// Undo/Redo-Historie des Hosts. Jeder Eintrag ist der Zustand vor bzw. nach
/// genau einem wirksamen Command.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo: SnapshotStack,
    redo: SnapshotStack,
}

impl EditHistory {
    /// Historie mit höchstens `depth` Undo- und `depth` Redo-Schritten.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            undo: SnapshotStack::with_depth(depth),
            redo: SnapshotStack::with_depth(depth),
        }
    }

    /// Legt den Zustand vor einer Mutation ab und verwirft Redo.
    pub fn record(&mut self, before: CurveSnapshot) {
        self.undo.push(before);
        self.redo.entries.clear();
    }

    /// Gibt `true` zurück, wenn ein Undo-Zustand vorliegt.
    pub fn can_undo(&self) -> bool {
        !self.undo.entries.is_empty()
    }

    /// Gibt `true` zurück, wenn ein Redo-Zustand vorliegt.
    pub fn can_redo(&self) -> bool {
        !self.redo.entries.is_empty()
    }

    /// Anzahl möglicher Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo.entries.len()
    }

    /// Tauscht `current` gegen den letzten Undo-Zustand; `current` wandert nach Redo.
    pub fn undo(&mut self, current: CurveSnapshot) -> Option<CurveSnapshot> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Gegenstück zu [`EditHistory::undo`].
    pub fn redo(&mut self, current: CurveSnapshot) -> Option<CurveSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }
}
