//! Partitioning records into type sections

use crate::domain::{PublicationRecord, PublicationType};

/// Records partitioned by [`PublicationType`], input order kept within each bucket
#[derive(Debug, Default)]
pub struct GroupedPublications<'a> {
    conference: Vec<&'a PublicationRecord>,
    journal: Vec<&'a PublicationRecord>,
    other: Vec<&'a PublicationRecord>,
}

impl<'a> GroupedPublications<'a> {
    pub fn from_records(records: &'a [PublicationRecord]) -> Self {
        let mut grouped = Self::default();
        for record in records {
            grouped.bucket_mut(record.pub_type).push(record);
        }
        grouped
    }

    pub fn bucket(&self, pub_type: PublicationType) -> &[&'a PublicationRecord] {
        match pub_type {
            PublicationType::Conference => &self.conference,
            PublicationType::Journal => &self.journal,
            PublicationType::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, pub_type: PublicationType) -> &mut Vec<&'a PublicationRecord> {
        match pub_type {
            PublicationType::Conference => &mut self.conference,
            PublicationType::Journal => &mut self.journal,
            PublicationType::Other => &mut self.other,
        }
    }

    /// Non-empty sections in output order
    pub fn sections(&self) -> impl Iterator<Item = (PublicationType, &[&'a PublicationRecord])> {
        PublicationType::ALL
            .into_iter()
            .map(move |t| (t, self.bucket(t)))
            .filter(|(_, entries)| !entries.is_empty())
    }

    /// Total number of records across all sections
    pub fn len(&self) -> usize {
        self.conference.len() + self.journal.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
