use enumap::EnuMap;

#[derive(EnuMap, Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masc,
    Femn,
    Neut,
}

#[derive(EnuMap, Debug, Clone, Copy, PartialEq, Eq)]
enum GrammaticalCase {
    Nominative,
    GenitiveTwo,
}

#[test]
fn test_from_fn_visits_every_variant() {
    let map = GenderMap::from_fn(|gender| gender != Gender::Neut);

    assert_eq!(map.get(&Gender::Masc), &true);
    assert_eq!(map.get(&Gender::Femn), &true);
    assert_eq!(map.get(&Gender::Neut), &false);
}

#[test]
fn test_maps_compare_as_a_whole() {
    let a = GenderMap::from_fn(|gender| gender == Gender::Masc);
    let b = GenderMap {
        masc: true,
        femn: false,
        neut: false,
    };
    assert_eq!(a, b);
    assert_ne!(a, GenderMap::default());
}

#[test]
fn test_enumap_mut() {
    let mut map = GenderMap::<u8>::default();

    *map.get_mut(&Gender::Masc) = 100;
    *map.get_mut(&Gender::Femn) = 200;

    assert_eq!(map.get(&Gender::Masc), &100);
    assert_eq!(map.get(&Gender::Femn), &200);
    assert_eq!(map.get(&Gender::Neut), &0);
}

#[test]
fn test_iter_follows_declaration_order() {
    let map = GenderMap {
        masc: "m",
        femn: "f",
        neut: "n",
    };
    let visited: Vec<_> = map.iter().map(|(gender, tag)| (gender, *tag)).collect();
    assert_eq!(
        visited,
        vec![(Gender::Masc, "m"), (Gender::Femn, "f"), (Gender::Neut, "n")]
    );
    assert_eq!(Gender::ALL, [Gender::Masc, Gender::Femn, Gender::Neut]);
}

#[test]
fn test_multi_word_variants_become_snake_case_fields() {
    let map = GrammaticalCaseMap {
        nominative: 1,
        genitive_two: 2,
    };
    assert_eq!(map.get(&GrammaticalCase::GenitiveTwo), &2);
}
