//! Wirksame Kurven-Commands in lokaler Form, synchron zur Undo-Historie.
//!
//! `applied` führt von der Startkurve des Hosts zum aktuellen Zustand,
//! `undone` hält rückgängig gemachte Commands für Redo vor. Damit lässt sich
//! jeder Zustand ohne Snapshots aus der Startkurve neu aufbauen.

use super::CurveCommand;
use crate::core::{Curve, CurveResult};

/// Command-Sicht auf die Host-Historie.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandLog {
    applied: Vec<CurveCommand>,
    undone: Vec<CurveCommand>,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen wirksamen Command an; ein neuer Zweig verwirft Redo.
    pub fn record(&mut self, command: CurveCommand) {
        self.applied.push(command);
        self.undone.clear();
    }

    /// Verschiebt den letzten Command auf den Redo-Stapel.
    pub fn mark_undone(&mut self) -> Option<&CurveCommand> {
        let command = self.applied.pop()?;
        self.undone.push(command);
        self.undone.last()
    }

    /// Holt den zuletzt rückgängig gemachten Command zurück.
    pub fn mark_redone(&mut self) -> Option<&CurveCommand> {
        let command = self.undone.pop()?;
        self.applied.push(command);
        self.applied.last()
    }

    /// Anzahl der aktuell wirksamen Commands.
    pub fn len(&self) -> usize {
        self.applied.len()
    }

    /// Gibt `true` zurück, wenn kein Command wirksam ist.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Wirksame Commands in Ausführungsreihenfolge.
    pub fn entries(&self) -> &[CurveCommand] {
        &self.applied
    }

    /// Rückgängig gemachte Commands, der nächste Redo-Kandidat zuletzt.
    pub fn undone(&self) -> &[CurveCommand] {
        &self.undone
    }

    /// Spielt alle wirksamen Commands auf `curve` ab.
    ///
    /// Auf der Startkurve des Hosts ergibt das dessen aktuelle Kurve.
    pub fn replay(&self, curve: &mut Curve) -> CurveResult<()> {
        for command in &self.applied {
            command.apply_to(curve)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn add(x: f32) -> CurveCommand {
        CurveCommand::AddSegment {
            anchor: Vec3::new(x, 0.0, 0.0),
        }
    }

    #[test]
    fn test_undo_redo_moves_entries_between_stacks() {
        let mut log = CommandLog::new();
        log.record(add(3.0));
        log.record(add(5.0));

        assert_eq!(log.mark_undone(), Some(&add(5.0)));
        assert_eq!(log.entries(), &[add(3.0)]);
        assert_eq!(log.undone(), &[add(5.0)]);

        assert_eq!(log.mark_redone(), Some(&add(5.0)));
        assert_eq!(log.len(), 2);
        assert!(log.undone().is_empty());
        assert_eq!(log.mark_redone(), None);
    }

    #[test]
    fn test_record_after_undo_drops_redo_branch() {
        let mut log = CommandLog::new();
        log.record(add(3.0));
        log.mark_undone();

        log.record(add(7.0));
        assert_eq!(log.entries(), &[add(7.0)]);
        assert!(log.undone().is_empty());
    }

    #[test]
    fn test_replay_rebuilds_curve() {
        let mut edited = Curve::new(Vec3::ZERO);
        let mut log = CommandLog::new();
        for command in [
            add(3.0),
            CurveCommand::MovePoint {
                index: 3,
                position: Vec3::new(1.0, 2.0, 0.0),
            },
            CurveCommand::SetClosed { closed: true },
        ] {
            command.apply_to(&mut edited).expect("gültiger Command");
            log.record(command);
        }

        let mut rebuilt = Curve::new(Vec3::ZERO);
        log.replay(&mut rebuilt).expect("Replay");
        assert_eq!(rebuilt, edited);
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let mut log = CommandLog::new();
        log.record(CurveCommand::RemoveSegment { segment: 4 });
        log.record(add(3.0));

        let mut curve = Curve::new(Vec3::ZERO);
        assert!(log.replay(&mut curve).is_err());
        assert_eq!(curve.segments_count(), 1);
    }
}
