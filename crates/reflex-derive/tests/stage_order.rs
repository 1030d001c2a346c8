use proptest::prelude::*;
use reflex_core::{ReflexError, ToneClass};
use reflex_derive::record::RHYME_GROUPS;
use reflex_derive::{
    derive_parts, Department, GanRules, Grade, HakkaRules, Initial, Openness, Part, RhymeClass,
    RhymeGroup, RuleSet,
};

fn record() -> impl Strategy<Value = RhymeClass> {
    let groups: Vec<RhymeGroup> = RHYME_GROUPS.chars().filter_map(RhymeGroup::new).collect();
    (
        0u32..5000,
        prop::sample::select(Initial::ALL.to_vec()),
        prop::sample::select(groups),
        prop::sample::select(Department::ALL.to_vec()),
        prop::sample::select(Grade::ALL.to_vec()),
        prop::sample::select(Openness::ALL.to_vec()),
        prop::sample::select(vec![
            ToneClass::Level,
            ToneClass::Rising,
            ToneClass::Departing,
            ToneClass::Entering,
        ]),
    )
        .prop_map(|(id, initial, rhyme_group, department, grade, openness, tone)| RhymeClass {
            id,
            initial,
            rhyme_group,
            department,
            grade,
            openness,
            tone,
        })
}

/// A miss reports its stage and exactly the parts derived before it.
fn check_partial_context<R: RuleSet>(record: &RhymeClass) {
    let Err(err) = derive_parts::<R>(record) else {
        return;
    };
    let info = match err {
        ReflexError::DerivationNotFound(info) => info,
        other => panic!("unexpected error variant: {:?}", other),
    };
    let stage = info.context.get("stage").expect("stage recorded");
    let position = Part::ORDER
        .iter()
        .position(|part| part.name() == stage.as_str())
        .expect("stage is a part name");
    for (index, part) in Part::ORDER.iter().enumerate() {
        assert_eq!(
            info.context.contains_key(part.name()),
            index < position,
            "{stage}: {}",
            part.name()
        );
    }
}

proptest! {
    #[test]
    fn misses_carry_the_partial_derivation(record in record()) {
        check_partial_context::<GanRules>(&record);
        check_partial_context::<HakkaRules>(&record);
    }

    #[test]
    fn tone_class_only_moves_coda_and_tone(record in record()) {
        let level = derive_parts::<GanRules>(&RhymeClass { tone: ToneClass::Level, ..record });
        let entering = derive_parts::<GanRules>(&RhymeClass { tone: ToneClass::Entering, ..record });
        prop_assert_eq!(level.is_ok(), entering.is_ok());
        if let (Ok(level), Ok(entering)) = (level, entering) {
            prop_assert_eq!(level.initial, entering.initial);
            prop_assert_eq!(level.medial, entering.medial);
            prop_assert_eq!(level.nucleus, entering.nucleus);
            prop_assert!(matches!(entering.tone, "7" | "8"));
        }
    }
}
