use ::odata_dto::json;
use ::odata_dto::models::*;
use ::odata_dto::{EnumValue, Flags, Parsable};
use proptest::prelude::*;

fn symbol_is_stable<E: EnumValue + std::fmt::Debug>(symbol: E) -> Result<(), TestCaseError> {
    let wire = symbol.as_str();
    prop_assert_eq!(E::parse(wire), Ok(symbol));
    prop_assert!(E::parse(&wire.to_uppercase()).is_err() || wire.to_uppercase() == wire);
    Ok(())
}

fn arb_symbol<E: EnumValue + std::fmt::Debug>() -> impl Strategy<Value = E> {
    prop::sample::select(E::VARIANTS.iter().map(|&(_, symbol)| symbol).collect::<Vec<_>>())
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 _-]{0,12}",
        // Quotes, escapes and non-ASCII.
        "[\"\\\\/\u{8}\u{c}\n\r\té€😀]{0,6}",
    ]
}

fn arb_mark_content() -> impl Strategy<Value = MarkContent> {
    (
        proptest::option::of(arb_text()),
        proptest::option::of(any::<i64>()),
        proptest::option::of(arb_text()),
    )
        .prop_map(|(name, font_size, text)| {
            let mut mark = MarkContent::new();
            mark.set_name(name);
            mark.set_font_size(font_size);
            mark.set_text(text);
            mark
        })
}

fn arb_label_action() -> impl Strategy<Value = LabelAction> {
    prop_oneof![
        arb_mark_content().prop_map(LabelAction::from),
        (arb_mark_content(), proptest::option::of(arb_symbol::<Alignment>()), proptest::option::of(any::<i32>()))
            .prop_map(|(mark, alignment, margin)| {
                let mut footer = AddFooter::new();
                footer.set_name(mark.name().cloned());
                footer.set_text(mark.text().cloned());
                footer.set_alignment(alignment);
                footer.set_margin(margin);
                LabelAction::from(footer)
            }),
        proptest::option::of(arb_symbol::<PageOrientation>()).prop_map(|orientation| {
            let mut watermark = AddWatermark::new();
            watermark.set_orientation(orientation);
            LabelAction::from(watermark)
        }),
        proptest::option::of(arb_symbol::<EncryptWith>()).prop_map(|encrypt_with| {
            let mut encrypt = EncryptContent::new();
            encrypt.set_encrypt_with(encrypt_with);
            LabelAction::from(encrypt)
        }),
        proptest::option::of(arb_text()).prop_map(|name| {
            let mut base = LabelActionBase::new();
            base.set_name(name);
            LabelAction::from(base)
        }),
    ]
}

proptest! {
    #[test]
    fn enum_symbols_are_stable(
        conditions in arb_symbol::<ConditionalAccessConditions>(),
        rule in arb_symbol::<ConditionalAccessRule>(),
        result in arb_symbol::<AppliedConditionalAccessPolicyResult>(),
        layout in arb_symbol::<TitleAreaLayoutType>(),
        target in arb_symbol::<SensitivityLabelTarget>(),
    ) {
        symbol_is_stable(conditions)?;
        symbol_is_stable(rule)?;
        symbol_is_stable(result)?;
        symbol_is_stable(layout)?;
        symbol_is_stable(target)?;
    }

    #[test]
    fn flags_round_trip(symbols in prop::collection::vec(arb_symbol::<ConditionalAccessConditions>(), 0..6)) {
        let flags: Flags<_> = symbols.iter().copied().collect();
        let parsed = Flags::<ConditionalAccessConditions>::parse(&flags.to_string()).unwrap();
        prop_assert_eq!(&parsed, &flags);
        for symbol in symbols {
            prop_assert!(parsed.contains(symbol));
        }
    }

    #[test]
    fn string_collections_keep_their_order(controls in prop::collection::vec(arb_text(), 0..8)) {
        let mut policy = AppliedConditionalAccessPolicy::new();
        policy.set_enforced_grant_controls(Some(controls.clone()));
        let decoded: AppliedConditionalAccessPolicy =
            json::from_str(&json::to_string(&policy).unwrap()).unwrap();
        prop_assert_eq!(decoded.enforced_grant_controls(), Some(&controls));
    }

    #[test]
    fn polymorphic_collections_keep_order_and_members(
        actions in prop::collection::vec(arb_label_action(), 0..6),
    ) {
        let mut label = SensitivityLabel::new();
        label.set_label_actions(Some(actions.clone()));
        let decoded: SensitivityLabel = json::from_str(&json::to_string(&label).unwrap()).unwrap();
        prop_assert_eq!(decoded.label_actions(), Some(&actions));
        for (decoded, original) in decoded.label_actions().unwrap().iter().zip(&actions) {
            prop_assert_eq!(decoded.odata_type(), original.odata_type());
        }
    }

    #[test]
    fn scalar_fields_round_trip(
        grace in proptest::option::of(any::<i32>()),
        wipe in proptest::option::of(any::<i32>()),
    ) {
        let mut lock = AndroidDeviceComplianceLocalActionLockDeviceWithPasscode::new();
        lock.set_grace_period_in_minutes(grace);
        lock.set_passcode_sign_in_failure_count_before_wipe(wipe);
        let action = AndroidDeviceComplianceLocalAction::from(lock);
        let decoded: AndroidDeviceComplianceLocalAction =
            json::from_str(&json::to_string(&action).unwrap()).unwrap();
        prop_assert_eq!(decoded, action);
    }
}
