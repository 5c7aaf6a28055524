//! Domain vocabulary: synonym groups, abbreviations, and retrieval aliases.
//!
//! Romanian plumbing-trade terms. Three tables with different jobs:
//!
//! - **Synonym groups**: interchangeable trade words (`teava`/`tub`/
//!   `conducta` all mean pipe). Bidirectional within a group.
//! - **Abbreviations**: one-way expansions of codes buyers type
//!   (`fi` → `filet interior`).
//! - **Aliases**: spelling/shorthand bridges used to broaden retrieval
//!   (`pp` finds `ppr` products).
//!
//! All entries are stored pre-normalized (lowercase, no diacritics); callers
//! pass already-normalized terms.

/// Interchangeable trade terms. A term can appear in several groups; the
/// FIRST group containing it wins for expansion and suggestions.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["teava", "tub", "conducta"],
    &["robinet", "ventil", "vana"],
    &["cot", "curba", "genunchi"],
    &["reductie", "reducere", "reducator"],
    &["imbinare", "conexiune", "fitinguri", "fitting", "racord"],
    &["cep", "robinet", "kran"],
    &["flansa", "flanse", "bride"],
    &["filet", "filetat"],
    &["bila", "sfera"],
    &["filtru", "strecuratoare"],
    &["cuplaj", "cuplare", "mufa"],
    &["adaptor", "adaptare"],
    &["olandez", "american", "niplu"],
    &["capac", "dop", "buson"],
    &["ppr", "polipropilena"],
    &["pvc", "policlorura"],
    &["inox", "otel inoxidabil"],
    &["alama", "brass"],
    &["alb", "alba"],
    &["negru", "neagra"],
    &["gri", "cenusiu"],
];

/// Abbreviation → full form.
fn abbreviation(term: &str) -> Option<&'static str> {
    let full = match term {
        "fi" => "filet interior",
        "fe" => "filet exterior",
        "dn" => "diametru nominal",
        "mm" => "milimetri",
        "cm" => "centimetri",
        "m" => "metru",
        "buc" => "bucata",
        "set" => "set",
        "kit" => "kit",
        _ => return None,
    };
    Some(full)
}

/// Retrieval aliases: shorthand and spelling variants worth probing the
/// index with when the literal keyword comes up empty.
fn aliases(term: &str) -> &'static [&'static str] {
    match term {
        "pp" => &["ppr", "polipropilena"],
        "ppr" => &["pp"],
        "polipropilena" => &["pp", "ppr"],
        "cu" => &["cupru"],
        "cupru" => &["cu"],
        "inx" => &["inox"],
        "inox" => &["inx"],
        "al" => &["alama"],
        "alama" => &["al"],
        "brz" => &["bronz"],
        "bronz" => &["brz"],
        "rob" => &["robinet"],
        "red" => &["reductie"],
        "rac" => &["racord"],
        "fi" => &["filet interior"],
        "fe" => &["filet exterior"],
        "gr" => &["grade", "grd"],
        "grade" => &["gr", "grd"],
        "grd" => &["gr", "grade"],
        "dn" => &["diametru nominal"],
        "d" => &["diametru"],
        "alb" => &["alba", "albe"],
        "neg" => &["negru", "neagra"],
        "vrd" => &["verde"],
        "buc" => &["bucata", "bucati"],
        "ml" => &["mililitri"],
        "mm" => &["milimetri"],
        _ => &[],
    }
}

/// Expand one normalized term: the term itself, then the other members of
/// its first synonym group, then its abbreviation full form, then its
/// aliases. Deduplicated, order stable, one hop only (expansions are never
/// themselves expanded).
pub fn expand_term(term: &str) -> Vec<String> {
    let mut expanded = vec![term.to_string()];
    let mut push_unique = |list: &mut Vec<String>, value: &str| {
        if !list.iter().any(|existing| existing == value) {
            list.push(value.to_string());
        }
    };

    if let Some(group) = SYNONYM_GROUPS
        .iter()
        .find(|group| group.contains(&term))
    {
        for member in *group {
            if *member != term {
                push_unique(&mut expanded, member);
            }
        }
    }
    if let Some(full) = abbreviation(term) {
        push_unique(&mut expanded, full);
    }
    for alias in aliases(term) {
        push_unique(&mut expanded, alias);
    }
    expanded
}

/// Expand a whole keyword list: union of per-term expansions, deduplicated,
/// keyword order preserved.
pub fn expand_query<'a, I>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expanded = Vec::new();
    for term in terms {
        for candidate in expand_term(term) {
            if !expanded.contains(&candidate) {
                expanded.push(candidate);
            }
        }
    }
    expanded
}

/// True when `expand_term` would return more than the term itself. Cheap
/// pre-check before the synonym retrieval fallback.
pub fn expands(term: &str) -> bool {
    abbreviation(term).is_some()
        || !aliases(term).is_empty()
        || SYNONYM_GROUPS
            .iter()
            .any(|group| group.contains(&term) && group.len() > 1)
}

/// The other members of the term's first synonym group, for "did you mean"
/// style hints. Empty when the term belongs to no group.
pub fn suggestions(term: &str) -> Vec<&'static str> {
    SYNONYM_GROUPS
        .iter()
        .find(|group| group.contains(&term))
        .map(|group| {
            group
                .iter()
                .filter(|member| **member != term)
                .copied()
                .collect()
        })
        .unwrap_or_default()
}

/// Frequently searched trade terms with English glosses, for the CLI help
/// surface.
pub fn common_terms() -> &'static [(&'static str, &'static str)] {
    &[
        ("teava / tub", "Pipe or tube"),
        ("robinet / ventil", "Valve or faucet"),
        ("cot", "Elbow fitting"),
        ("reductie", "Reducer"),
        ("fi", "Filet interior (internal thread)"),
        ("fe", "Filet exterior (external thread)"),
        ("ppr", "Polypropylene pipe"),
        ("inox", "Stainless steel"),
        ("olandez", "Union joint"),
    ]
}
