use std::collections::HashMap;

use super::recipient::{CompanyGroup, Recipient};

/// Partitions recipients by domain.
///
/// Groups appear in the order their domain is first seen; recipients keep
/// their relative input order inside each group. Every group starts
/// collapsed.
pub fn group_by_company<'a, I>(recipients: I) -> Vec<CompanyGroup>
where
    I: IntoIterator<Item = &'a Recipient>,
{
    let mut groups: Vec<CompanyGroup> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for recipient in recipients {
        let domain = recipient.domain();
        let index = *positions.entry(domain).or_insert_with(|| {
            groups.push(CompanyGroup::new(domain));
            groups.len() - 1
        });
        groups[index].emails.push(recipient.clone());
    }

    groups
}
