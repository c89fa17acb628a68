//! Host-Seite einer Kurve: Welt-Ursprung, Command-Dispatch und Snapshots.
//!
//! Die Kurve speichert lokale Koordinaten. Der Host addiert beim Lesen den
//! Ursprung und zieht ihn bei Mutationen wieder ab. Er hält keine Kopien der
//! Punkte, sondern liest bei jeder Abfrage neu aus der Kurve.
//! Im 2D-Modus landen alle Command-Positionen auf der lokalen XY-Ebene.

use super::{CommandLog, CurveCommand, CurveSnapshot, EditHistory};
use crate::core::{Curve, CurveResult};
use crate::shared::{CurveMode, CurveOptions};
use glam::Vec3;

/// Besitzt genau eine Kurve samt Undo-Historie.
#[derive(Debug)]
pub struct CurveHost {
    origin: Vec3,
    curve: Curve,
    history: EditHistory,
    command_log: CommandLog,
    end_point_tolerance: f32,
    mode: CurveMode,
}

impl CurveHost {
    /// Erstellt einen Host mit Standard-Optionen und Default-Kurve um `origin`.
    pub fn new(origin: Vec3) -> Self {
        Self::with_options(origin, &CurveOptions::default())
    }

    /// Erstellt einen Host mit Historien-Tiefe, End-Toleranz und Modus aus `options`.
    pub fn with_options(origin: Vec3, options: &CurveOptions) -> Self {
        Self {
            origin,
            curve: Self::initial_curve(),
            history: EditHistory::with_depth(options.history_depth),
            command_log: CommandLog::new(),
            end_point_tolerance: options.end_point_tolerance,
            mode: options.curve_mode,
        }
    }

    /// Lokale Startkurve jedes Hosts; Ausgangspunkt für [`CommandLog::replay`].
    pub fn initial_curve() -> Curve {
        Curve::new(Vec3::ZERO)
    }

    /// Welt-Ursprung der lokalen Koordinaten.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Verschiebt die gesamte Kurve in der Welt (lokale Punkte bleiben unverändert).
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// Aktueller Bearbeitungsraum.
    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Wechselt den Bearbeitungsraum. Bestehende Punkte bleiben unverändert,
    /// erst folgende Commands werden beschränkt.
    pub fn set_mode(&mut self, mode: CurveMode) {
        self.mode = mode;
    }

    /// Kurve in lokalen Koordinaten.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Siehe [`Curve::points_count`].
    pub fn points_count(&self) -> usize {
        self.curve.points_count()
    }

    /// Siehe [`Curve::segments_count`].
    pub fn segments_count(&self) -> usize {
        self.curve.segments_count()
    }

    /// Siehe [`Curve::is_closed`].
    pub fn is_closed(&self) -> bool {
        self.curve.is_closed()
    }

    /// Siehe [`Curve::is_auto_set_control_points`].
    pub fn is_auto_set_control_points(&self) -> bool {
        self.curve.is_auto_set_control_points()
    }

    /// Alle Punkte in Weltkoordinaten.
    pub fn points(&self) -> Vec<Vec3> {
        self.curve.points().iter().map(|p| *p + self.origin).collect()
    }

    /// Einzelner Punkt in Weltkoordinaten.
    pub fn get(&self, index: usize) -> CurveResult<Vec3> {
        Ok(self.curve.get(index)? + self.origin)
    }

    /// Segmentpunkte in Weltkoordinaten.
    pub fn points_in_segment(&self, segment_index: usize) -> CurveResult<[Vec3; 4]> {
        let points = self.curve.points_in_segment(segment_index)?;
        Ok(points.map(|p| p + self.origin))
    }

    /// Resampelte Punkte in Weltkoordinaten.
    pub fn points_on_curve(&self, resolution: usize) -> impl Iterator<Item = Vec3> + '_ {
        let origin = self.origin;
        self.curve
            .calculate_points_on_curve_with_tolerance(resolution, self.end_point_tolerance)
            .map(move |p| p + origin)
    }

    /// Führt einen Command (Weltkoordinaten) aus und legt bei Erfolg einen
    /// Undo-Snapshot sowie die lokale Form im Command-Log ab.
    ///
    /// Fehlgeschlagene Commands verändern weder Kurve noch Historie.
    /// Commands ohne Wirkung (z.B. erneutes Schließen) erzeugen keinen Eintrag.
    pub fn apply(&mut self, command: CurveCommand) -> CurveResult<()> {
        let snapshot = CurveSnapshot::capture(&self.curve);
        let (origin, mode) = (self.origin, self.mode);
        let local = command.map_positions(|p| mode.constrain(p - origin));

        if let Err(e) = local.apply_to(&mut self.curve) {
            log::warn!("{} fehlgeschlagen: {}", local.label(), e);
            return Err(e);
        }

        if snapshot.curve() != &self.curve {
            log::debug!("{} ausgeführt", local.label());
            self.history.record(snapshot);
            self.command_log.record(local);
        }
        Ok(())
    }

    /// Führt mehrere Commands nacheinander aus, bricht beim ersten Fehler ab.
    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = CurveCommand>,
    ) -> CurveResult<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Macht den letzten wirksamen Command rückgängig.
    pub fn undo(&mut self) -> bool {
        let current = CurveSnapshot::capture(&self.curve);
        match self.history.undo(current) {
            Some(prev) => {
                prev.apply_to(&mut self.curve);
                self.command_log.mark_undone();
                log::debug!("Undo: {} Punkte", self.curve.points_count());
                true
            }
            None => false,
        }
    }

    /// Stellt den zuletzt rückgängig gemachten Zustand wieder her.
    pub fn redo(&mut self) -> bool {
        let current = CurveSnapshot::capture(&self.curve);
        match self.history.redo(current) {
            Some(next) => {
                next.apply_to(&mut self.curve);
                self.command_log.mark_redone();
                log::debug!("Redo: {} Punkte", self.curve.points_count());
                true
            }
            None => false,
        }
    }

    /// Snapshot-Historie (nur lesend; Undo/Redo laufen über den Host).
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Wirksame Commands in lokaler Form, synchron zu Undo/Redo.
    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }
}
