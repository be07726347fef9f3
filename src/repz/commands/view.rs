use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::model::Dataset;

/// Lists entries. With no tokens the whole dataset is listed; otherwise
/// each token is parsed as a `column:value` predicate and only entries
/// matching all of them are returned, in source order.
pub fn run(dataset: &Dataset, tokens: &[String]) -> Result<CmdResult> {
    let entries = if tokens.is_empty() {
        dataset.entries.clone()
    } else {
        let predicates = filter::parse(tokens)?;
        filter::evaluate(&dataset.entries, &predicates)
    };

    Ok(CmdResult::default().with_listed_entries(entries))
}
