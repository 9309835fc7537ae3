//! Transformed-spectrum table.

use mzwave_spec::{Peak, TransformedPeak};

use crate::mapping::MappedPeak;
use crate::synthesis::Partial;

/// Joins source peaks with their mapped values, one row per peak in input
/// order.
pub fn build_table(peaks: &[Peak], mapped: &[MappedPeak]) -> Vec<TransformedPeak> {
    debug_assert_eq!(peaks.len(), mapped.len());
    peaks
        .iter()
        .zip(mapped)
        .map(|(peak, m)| TransformedPeak {
            mz: peak.mz,
            frequency: m.frequency,
            intensity: peak.intensity,
            amplitude_linear: m.amplitude.linear,
            amplitude_db: m.amplitude.db,
        })
        .collect()
}

/// Partials to synthesize from a table. Audibility is decided later.
pub fn table_partials(table: &[TransformedPeak]) -> Vec<Partial> {
    table
        .iter()
        .map(|row| Partial::new(row.frequency, row.amplitude_linear))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::map_spectrum;
    use mzwave_spec::AlgorithmParams;

    #[test]
    fn test_table_rows_follow_input() {
        let peaks = vec![
            Peak::new(301.0, 500.0),
            Peak::new(300.0, 1000.0),
            Peak::new(299.0, 0.0),
        ];
        let mapped = map_spectrum(&peaks, &AlgorithmParams::Linear { offset: 300.0 }).unwrap();
        let table = build_table(&peaks, &mapped);

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].mz, 301.0);
        assert_eq!(table[0].frequency, 601.0);
        assert_eq!(table[0].intensity, 500.0);
        assert_eq!(table[0].amplitude_linear, 0.5);
        assert_eq!(table[1].amplitude_db, 0.0);
        assert_eq!(table[2].amplitude_linear, 0.0);
        assert_eq!(table[2].amplitude_db, -100.0);

        let partials = table_partials(&table);
        assert_eq!(partials[1], Partial::new(600.0, 1.0));
    }
}
