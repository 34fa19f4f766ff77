//! Seed data for the review queue.
//!
//! The dataset is fabricated: field values are embedded literals and the
//! image URLs are stock photographs, not real patient studies.

use chrono::NaiveDate;

use crate::models::Scan;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are literal and always valid.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// The default mock scans reviewed in a session, in queue order.
pub fn default_scans() -> Vec<Scan> {
    vec![
        Scan {
            id: "1".to_string(),
            patient_id: "PT-2024-001".to_string(),
            patient_name: "Sarah Johnson".to_string(),
            age: 45,
            gender: "Female".to_string(),
            scan_type: "PET/CT".to_string(),
            scan_date: ymd(2024, 12, 24),
            image_url: "https://images.unsplash.com/photo-1706065638524-eb52e7165abf?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080".to_string(),
            body_part: "Chest".to_string(),
        },
        Scan {
            id: "2".to_string(),
            patient_id: "PT-2024-002".to_string(),
            patient_name: "Michael Chen".to_string(),
            age: 62,
            gender: "Male".to_string(),
            scan_type: "PET Scan".to_string(),
            scan_date: ymd(2024, 12, 24),
            image_url: "https://images.unsplash.com/photo-1587010580103-fd86b8ea14ca?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080".to_string(),
            body_part: "Full Body".to_string(),
        },
        Scan {
            id: "3".to_string(),
            patient_id: "PT-2024-003".to_string(),
            patient_name: "Emma Davis".to_string(),
            age: 38,
            gender: "Female".to_string(),
            scan_type: "Brain MRI".to_string(),
            scan_date: ymd(2024, 12, 25),
            image_url: "https://images.unsplash.com/photo-1758691463569-66de91d76452?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080".to_string(),
            body_part: "Brain".to_string(),
        },
        Scan {
            id: "4".to_string(),
            patient_id: "PT-2024-004".to_string(),
            patient_name: "Robert Wilson".to_string(),
            age: 55,
            gender: "Male".to_string(),
            scan_type: "Chest X-Ray".to_string(),
            scan_date: ymd(2024, 12, 25),
            image_url: "https://images.unsplash.com/photo-1584555684040-bad07f46a21f?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080".to_string(),
            body_part: "Chest".to_string(),
        },
        Scan {
            id: "5".to_string(),
            patient_id: "PT-2024-005".to_string(),
            patient_name: "Lisa Martinez".to_string(),
            age: 51,
            gender: "Female".to_string(),
            scan_type: "CT Scan".to_string(),
            scan_date: ymd(2024, 12, 26),
            image_url: "https://images.unsplash.com/photo-1631563020912-213371f1d768?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixlib=rb-4.1.0&q=80&w=1080".to_string(),
            body_part: "Abdomen".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_five_scans_in_queue_order() {
        let scans = default_scans();
        assert_eq!(scans.len(), 5);

        let ids: Vec<&str> = scans.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_seed_patient_ids_are_unique() {
        let scans = default_scans();
        for (i, scan) in scans.iter().enumerate() {
            assert_eq!(
                scan.patient_id,
                format!("PT-2024-{:03}", i + 1),
                "unexpected patient id at position {}",
                i
            );
        }
    }

    #[test]
    fn test_seed_fields_are_populated() {
        for scan in default_scans() {
            assert!(!scan.patient_name.is_empty());
            assert!(!scan.scan_type.is_empty());
            assert!(!scan.body_part.is_empty());
            assert!(
                scan.image_url.starts_with("https://"),
                "image reference for {} should be an opaque URL",
                scan.id
            );
        }
    }
}
