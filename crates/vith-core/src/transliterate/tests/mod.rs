
use super::*;

/// Latin sentence and its Vithkuqi rendering under the built-in alphabet.
pub(super) const SENTENCE_LATIN: &str =
    "Xhorxh W. Bush dhe Bill Klinton shtrënguan duart në mirënjohje.";
pub(super) const SENTENCE_VITHKUQI: &str = "𐖓𐖮𐖱𐖺 W. 𐕱𐖷𐖴 𐖝𐖞 𐕱𐖥𐖪 𐖁𐖩𐖥𐖬𐖵𐖮𐖬 𐖴𐖵𐖱𐖟𐖬𐖡𐖷𐖗𐖬 𐖜𐖷𐖗𐖱𐖵 𐖬𐖟 𐖫𐖥𐖱𐖟𐖭𐖮𐖣𐖧𐖞.";

pub(super) const UNMAPPED: [char; 6] = [
    '\u{10572}',
    '\u{1057D}',
    '\u{1057F}',
    '\u{10599}',
    '\u{105A4}',
    '\u{105A6}',
];

pub(super) fn with_policy(policy: UnmappedPolicy) -> Transliterator<'static> {
    Transliterator::new(EquivalenceTable::global(), policy)
}
