// pairs.rs - Pairwise inter-gene distance engine

use crate::core::arms::ArmAssignment;
use crate::data::feature::{Arm, Feature, GenePair};
use std::collections::BTreeMap;

/// One (chromosome, arm) output partition
#[derive(Debug, Clone)]
pub struct Partition {
    pub chromosome: String,
    pub arm: Arm,
    pub pairs: Vec<GenePair>,
}

impl Partition {
    /// Destination key for the persist collaborator
    pub fn destination_key(&self) -> String {
        destination_key(&self.chromosome, self.arm)
    }
}

/// Deterministic destination key for a (chromosome, arm) partition
pub fn destination_key(chromosome: &str, arm: Arm) -> String {
    format!("{}-{}", chromosome, arm.as_str())
}

/// Distance between two features on the same chromosome arm.
///
/// The two directed gap terms are measured end-of-A to start-of-B and
/// start-of-A to end-of-B; the distance is the smaller magnitude. When the
/// terms disagree in sign the coordinate ranges overlap or abut, and the
/// distance collapses to 0. Zero is its own sign class (`i64::signum`), so
/// an exactly-abutting pair takes the overlap branch.
pub fn pair_distance(a: &Feature, b: &Feature) -> u64 {
    let end_to_start = a.max - b.min;
    let start_to_end = a.min - b.max;

    if end_to_start.signum() != start_to_end.signum() {
        return 0;
    }

    end_to_start.unsigned_abs().min(start_to_end.unsigned_abs())
}

/// Group arm assignments by (chromosome, arm) and emit the full ordered
/// cross product of each group with itself. Self-pairs (A,A) are part of the
/// cross-join semantics and are kept unless `keep_self_pairs` is false.
/// Partitions come out in deterministic order: chromosomes sorted, left arm
/// before right, pair rows in nested-loop order over the group's input order.
pub fn build_partitions(assignments: &[ArmAssignment], keep_self_pairs: bool) -> Vec<Partition> {
    let mut groups: BTreeMap<(String, Arm), Vec<&Feature>> = BTreeMap::new();
    for assignment in assignments {
        groups
            .entry((assignment.feature.chromosome.clone(), assignment.arm))
            .or_default()
            .push(&assignment.feature);
    }

    let mut partitions = Vec::with_capacity(groups.len());

    for ((chromosome, arm), members) in groups {
        let mut pairs = Vec::with_capacity(members.len() * members.len());

        for (i, a) in members.iter().enumerate() {
            for (j, b) in members.iter().enumerate() {
                if !keep_self_pairs && i == j {
                    continue;
                }
                pairs.push(GenePair {
                    chromosome: chromosome.clone(),
                    arm,
                    gene_id_a: a.gene_id.clone(),
                    gene_id_b: b.gene_id.clone(),
                    orf_id_a: a.orf_id.clone(),
                    orf_id_b: b.orf_id.clone(),
                    gene_name_a: a.gene_name.clone(),
                    gene_name_b: b.gene_name.clone(),
                    distance: pair_distance(a, b),
                });
            }
        }

        partitions.push(Partition {
            chromosome,
            arm,
            pairs,
        });
    }

    partitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feature::FeatureKind;

    fn feature(gene_id: &str, min: i64, max: i64) -> Feature {
        Feature {
            gene_id: gene_id.to_string(),
            orf_id: format!("orf-{}", gene_id),
            gene_name: format!("name-{}", gene_id),
            chromosome: "I".to_string(),
            kind: FeatureKind::Orf,
            min,
            max,
        }
    }

    fn assignment(gene_id: &str, arm: Arm, min: i64, max: i64) -> ArmAssignment {
        ArmAssignment {
            feature: feature(gene_id, min, max),
            arm,
        }
    }

    #[test]
    fn test_disjoint_pair_distance() {
        // end_to_start = 50-60 = -10, start_to_end = 10-100 = -90, same sign
        let a = feature("A", 10, 50);
        let b = feature("B", 60, 100);
        assert_eq!(pair_distance(&a, &b), 10);
        assert_eq!(pair_distance(&b, &a), 10); // symmetric
    }

    #[test]
    fn test_overlapping_pair_distance_is_zero() {
        // end_to_start = 100-50 = 50, start_to_end = 10-150 = -140, signs differ
        let a = feature("A", 10, 100);
        let b = feature("B", 50, 150);
        assert_eq!(pair_distance(&a, &b), 0);
        assert_eq!(pair_distance(&b, &a), 0);
    }

    #[test]
    fn test_abutting_pair_takes_overlap_branch() {
        // end_to_start = 50-50 = 0 while start_to_end = 10-90 = -90: zero is
        // its own sign class, so the pair counts as overlapping
        let a = feature("A", 10, 50);
        let b = feature("B", 50, 90);
        assert_eq!(pair_distance(&a, &b), 0);
    }

    #[test]
    fn test_self_pair_distance_is_zero() {
        let a = feature("A", 10, 50);
        assert_eq!(pair_distance(&a, &a), 0);
    }

    #[test]
    fn test_contained_pair_distance_is_zero() {
        let a = feature("A", 10, 200);
        let b = feature("B", 50, 80);
        assert_eq!(pair_distance(&a, &b), 0);
    }

    #[test]
    fn test_distance_symmetry_over_group() {
        let members = [
            feature("A", 10, 50),
            feature("B", 60, 100),
            feature("C", 40, 70),
            feature("D", 500, 600),
        ];
        for a in &members {
            for b in &members {
                assert_eq!(pair_distance(a, b), pair_distance(b, a));
            }
        }
    }

    #[test]
    fn test_cross_product_cardinality_with_self_pairs() {
        let assignments = vec![
            assignment("A", Arm::Left, 10, 50),
            assignment("B", Arm::Left, 60, 100),
            assignment("C", Arm::Left, 200, 250),
        ];
        let partitions = build_partitions(&assignments, true);
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0].pairs.len(), 9); // n^2 with the diagonal

        // self-pairs are present and trivially zero
        let self_pairs: Vec<_> = partitions[0]
            .pairs
            .iter()
            .filter(|p| p.gene_id_a == p.gene_id_b)
            .collect();
        assert_eq!(self_pairs.len(), 3);
        assert!(self_pairs.iter().all(|p| p.distance == 0));
    }

    #[test]
    fn test_drop_self_pairs_removes_exactly_the_diagonal() {
        let assignments = vec![
            assignment("A", Arm::Left, 10, 50),
            assignment("B", Arm::Left, 60, 100),
            assignment("C", Arm::Left, 200, 250),
        ];
        let partitions = build_partitions(&assignments, false);
        assert_eq!(partitions[0].pairs.len(), 6); // n^2 - n
        assert!(partitions[0].pairs.iter().all(|p| p.gene_id_a != p.gene_id_b));
    }

    #[test]
    fn test_pairs_never_cross_arms() {
        // Worked example: g1 on the left arm, g2 on the right arm of the
        // same chromosome; the pair (g1,g2) must never be emitted
        let assignments = vec![
            assignment("g1", Arm::Left, 10, 50),
            assignment("g2", Arm::Right, 200, 250),
        ];
        let partitions = build_partitions(&assignments, true);
        assert_eq!(partitions.len(), 2);
        for partition in &partitions {
            assert_eq!(partition.pairs.len(), 1);
            assert_eq!(partition.pairs[0].gene_id_a, partition.pairs[0].gene_id_b);
        }
    }

    #[test]
    fn test_partition_order_is_deterministic() {
        let mut assignments = vec![
            assignment("b", Arm::Right, 200, 250),
            assignment("a", Arm::Left, 10, 50),
        ];
        assignments[0].feature.chromosome = "II".to_string();

        let keys: Vec<String> = build_partitions(&assignments, true)
            .iter()
            .map(|p| p.destination_key())
            .collect();
        assert_eq!(keys, vec!["I-left".to_string(), "II-right".to_string()]);
    }

    #[test]
    fn test_pair_rows_carry_both_identifier_sets() {
        let assignments = vec![
            assignment("A", Arm::Left, 10, 50),
            assignment("B", Arm::Left, 60, 100),
        ];
        let partitions = build_partitions(&assignments, false);
        let pair = &partitions[0].pairs[0];
        assert_eq!(pair.gene_id_a, "A");
        assert_eq!(pair.orf_id_b, "orf-B");
        assert_eq!(pair.gene_name_a, "name-A");
        assert_eq!(pair.distance, 10);
    }

    #[test]
    fn test_destination_key_format() {
        assert_eq!(destination_key("IV", Arm::Left), "IV-left");
        assert_eq!(destination_key("XVI", Arm::Right), "XVI-right");
    }
}
