use ::odata_dto::json::{self, JsonParseNode};
use ::odata_dto::models::*;
use ::odata_dto::{AdditionalDataHolder, ByteArray, Error, Flags, Number, ParseNode, Parsable, Value};
use ::uuid::Uuid;

fn json_eq(actual: &str, expected: &str) {
    let actual: serde_json::Value = serde_json::from_str(actual).unwrap();
    let expected: serde_json::Value = serde_json::from_str(expected).unwrap();
    assert_eq!(actual, expected);
}

mod android_compliance {
    use super::*;

    const LOCK_WITH_PASSCODE: &str = r##"{
        "@odata.type": "#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode",
        "gracePeriodInMinutes": 5,
        "passcodeSignInFailureCountBeforeWipe": 6
    }"##;

    #[test]
    fn worked_example() {
        let action: AndroidDeviceComplianceLocalAction = json::from_str(LOCK_WITH_PASSCODE).unwrap();
        let lock = match &action {
            AndroidDeviceComplianceLocalAction::LockDeviceWithPasscode(lock) => lock,
            other => panic!("dispatched to {:?}", other),
        };
        assert_eq!(lock.grace_period_in_minutes(), Some(&5));
        assert_eq!(lock.passcode_sign_in_failure_count_before_wipe(), Some(&6));
        assert_eq!(lock.passcode(), None);

        let out = json::to_string(&action).unwrap();
        assert_eq!(
            out,
            concat!(
                r##"{"gracePeriodInMinutes":5,"##,
                r##""@odata.type":"#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode","##,
                r##""passcodeSignInFailureCountBeforeWipe":6}"##,
            ),
        );
        let grace = out.find("gracePeriodInMinutes").unwrap();
        let wipe = out.find("passcodeSignInFailureCountBeforeWipe").unwrap();
        assert!(grace < wipe);
        assert!(!out.contains("passcode\""));
    }

    #[test]
    fn read_only_passcode_is_decoded_but_never_written() {
        let action: AndroidDeviceComplianceLocalActionLockDeviceWithPasscode = json::from_str(
            r#"{"passcode":"1234","passcodeSignInFailureCountBeforeWipe":3}"#,
        )
        .unwrap();
        assert_eq!(action.passcode().map(String::as_str), Some("1234"));
        assert!(!json::to_string(&action).unwrap().contains("1234"));
    }

    #[test]
    fn lock_device_dispatch() {
        let action: AndroidDeviceComplianceLocalAction = json::from_str(
            r##"{"@odata.type":"#microsoft.graph.androidDeviceComplianceLocalActionLockDevice","gracePeriodInMinutes":1}"##,
        )
        .unwrap();
        assert!(matches!(
            action,
            AndroidDeviceComplianceLocalAction::LockDevice(ref lock)
                if lock.grace_period_in_minutes() == Some(&1)
        ));
    }

    #[test]
    fn base_type_keeps_the_wire_discriminator() {
        let action: AndroidDeviceComplianceLocalAction = json::from_str(
            r##"{"@odata.type":"#microsoft.graph.androidDeviceComplianceLocalActionWipe","gracePeriodInMinutes":30}"##,
        )
        .unwrap();
        match &action {
            AndroidDeviceComplianceLocalAction::Base(base) => {
                assert_eq!(base.grace_period_in_minutes(), Some(&30));
            }
            other => panic!("dispatched to {:?}", other),
        }
        assert_eq!(
            action.odata_type(),
            Some("#microsoft.graph.androidDeviceComplianceLocalActionWipe"),
        );
    }

    #[test]
    fn subtype_constructors_stamp_their_discriminator() {
        assert_eq!(
            AndroidDeviceComplianceLocalActionLockDevice::new().odata_type(),
            Some(AndroidDeviceComplianceLocalActionLockDevice::ODATA_TYPE),
        );
        assert_eq!(AndroidDeviceComplianceLocalActionBase::new().odata_type(), None);
    }
}

mod label_actions {
    use super::*;

    #[test]
    fn three_level_chain() {
        let action: LabelAction = json::from_str(
            r##"{
                "@odata.type": "#microsoft.graph.addFooter",
                "name": "footer",
                "fontColor": "#FF0000",
                "fontSize": 12,
                "text": "Confidential",
                "alignment": "center",
                "margin": 5
            }"##,
        )
        .unwrap();
        let footer = match &action {
            LabelAction::AddFooter(footer) => footer,
            other => panic!("dispatched to {:?}", other),
        };
        assert_eq!(footer.name().map(String::as_str), Some("footer"));
        assert_eq!(footer.font_size(), Some(&12));
        assert_eq!(footer.alignment(), Some(&Alignment::Center));
        assert_eq!(footer.margin(), Some(&5));

        assert_eq!(
            json::to_string(&action).unwrap(),
            concat!(
                r##"{"name":"footer","@odata.type":"#microsoft.graph.addFooter","##,
                r##""fontColor":"#FF0000","fontSize":12,"text":"Confidential","##,
                r##""alignment":"center","margin":5}"##,
            ),
        );
    }

    #[test]
    fn intermediate_member_is_a_target_too() {
        let action: LabelAction =
            json::from_str(r##"{"@odata.type":"#microsoft.graph.markContent","text":"x"}"##).unwrap();
        assert!(matches!(action, LabelAction::MarkContent(_)));
    }

    #[test]
    fn watermark_and_encryption() {
        let actions: Vec<LabelAction> = json::collection_from_str(
            r##"[
                {"@odata.type":"#microsoft.graph.addWatermark","orientation":"diagonal"},
                {"@odata.type":"#microsoft.graph.encryptContent","encryptWith":"userDefinedRights"}
            ]"##,
        )
        .unwrap();
        match &actions[..] {
            [LabelAction::AddWatermark(watermark), LabelAction::EncryptContent(encrypt)] => {
                assert_eq!(watermark.orientation(), Some(&PageOrientation::Diagonal));
                assert_eq!(encrypt.encrypt_with(), Some(&EncryptWith::UserDefinedRights));
            }
            other => panic!("unexpected actions {:?}", other),
        }
    }
}

mod sensitivity_labels {
    use super::*;

    const LABEL: &str = r##"{
        "id": "label-1",
        "@odata.type": "#microsoft.graph.sensitivityLabel",
        "applicableTo": "site,email",
        "applicationMode": "recommended",
        "isDefault": false,
        "labelActions": [
            {"@odata.type": "#microsoft.graph.addHeader", "text": "Top", "alignment": "left"},
            {"@odata.type": "#microsoft.graph.protectOnlineMeetingAction", "name": "meeting"},
            {"@odata.type": "#microsoft.graph.addFooter", "text": "Bottom"}
        ],
        "priority": 2,
        "sublabels": [
            {"id": "label-1a", "name": "Child", "sublabels": []}
        ]
    }"##;

    #[test]
    fn polymorphic_collection_keeps_order_and_dispatches_per_element() {
        let label: SensitivityLabel = json::from_str(LABEL).unwrap();
        let actions = label.label_actions().unwrap();
        assert_eq!(actions.len(), 3);
        assert!(matches!(&actions[0], LabelAction::AddHeader(header) if header.text().map(String::as_str) == Some("Top")));
        assert!(matches!(&actions[1], LabelAction::Base(base) if base.name().map(String::as_str) == Some("meeting")));
        assert!(matches!(&actions[2], LabelAction::AddFooter(_)));
        assert_eq!(
            actions[1].odata_type(),
            Some("#microsoft.graph.protectOnlineMeetingAction"),
        );
    }

    #[test]
    fn flags_and_recursion() {
        let label: SensitivityLabel = json::from_str(LABEL).unwrap();
        let targets = label.applicable_to().unwrap();
        assert!(targets.contains(SensitivityLabelTarget::Email));
        assert!(targets.contains(SensitivityLabelTarget::Site));
        assert_eq!(targets.to_string(), "email,site");
        assert_eq!(label.application_mode(), Some(&ApplicationMode::Recommended));
        assert_eq!(label.is_default(), Some(&false));
        assert_eq!(label.id().map(String::as_str), Some("label-1"));

        let sublabels = label.sublabels().unwrap();
        assert_eq!(sublabels[0].name().map(String::as_str), Some("Child"));
        assert_eq!(sublabels[0].sublabels(), Some(&vec![]));
        // Decoded directly, not through a family: the wire held no discriminator.
        assert_eq!(sublabels[0].odata_type(), Some(SensitivityLabel::ODATA_TYPE));
    }

    #[test]
    fn round_trip() {
        let label: SensitivityLabel = json::from_str(LABEL).unwrap();
        let again: SensitivityLabel = json::from_str(&json::to_string(&label).unwrap()).unwrap();
        assert_eq!(again, label);
    }
}

mod access_reviews {
    use super::*;

    #[test]
    fn business_flow_with_nested_settings() {
        let settings: AccessReviewSettingsKind = json::from_str(
            r##"{
                "@odata.type": "#microsoft.graph.businessFlowSettings",
                "autoReviewEnabled": true,
                "autoReviewSettings": {"notReviewedResult": "Deny"},
                "durationInDays": 14,
                "recurrenceSettings": {"recurrenceType": "monthly", "recurrenceCount": 3}
            }"##,
        )
        .unwrap();
        let flow = match &settings {
            AccessReviewSettingsKind::BusinessFlow(flow) => flow,
            other => panic!("dispatched to {:?}", other),
        };
        assert_eq!(flow.duration_in_days(), Some(&14));
        assert_eq!(flow.auto_review_enabled(), Some(&true));
        assert_eq!(
            flow.auto_review_settings()
                .and_then(AutoReviewSettings::not_reviewed_result)
                .map(String::as_str),
            Some("Deny"),
        );
        let recurrence = flow.recurrence_settings().unwrap();
        assert_eq!(recurrence.recurrence_count(), Some(&3));
        assert_eq!(recurrence.duration_in_days(), None);
    }

    #[test]
    fn unset_nested_objects_are_omitted() {
        let out = json::to_string(&AccessReviewSettings::new()).unwrap();
        json_eq(
            &out,
            r#"{
                "accessRecommendationsEnabled": null,
                "activityDurationInDays": null,
                "autoApplyReviewResultsEnabled": null,
                "autoReviewEnabled": null,
                "justificationRequiredOnApproval": null,
                "mailNotificationsEnabled": null,
                "@odata.type": null,
                "remindersEnabled": null
            }"#,
        );
    }
}

mod title_area {
    use super::*;

    const TITLE_AREA: &str = r##"{
        "alternativeText": "",
        "enableGradientEffect": true,
        "layout": "colorBlock",
        "serverProcessedContent": {
            "htmlStrings": [{"key": "title", "value": "<b>Hi</b>"}],
            "customMetadata": [{"key": "meta", "value": {"nested": [1, 2.5, null]}}],
            "links": []
        },
        "textAlignment": "center",
        "themeColor": "#FFFFFF"
    }"##;

    #[test]
    fn decode() {
        let area: TitleArea = json::from_str(TITLE_AREA).unwrap();
        assert_eq!(area.alternative_text().map(String::as_str), Some(""));
        assert_eq!(area.image_web_url(), None);
        assert_eq!(area.layout(), Some(&TitleAreaLayoutType::ColorBlock));
        assert_eq!(area.text_alignment(), Some(&TitleAreaTextAlignmentType::Center));
        assert_eq!(
            area.additional_data().get("themeColor"),
            Some(&Value::from("#FFFFFF")),
        );

        let content = area.server_processed_content().unwrap();
        assert_eq!(content.links(), Some(&vec![]));
        assert_eq!(content.image_sources(), None);
        let pair = &content.html_strings().unwrap()[0];
        assert_eq!(pair.value().map(String::as_str), Some("<b>Hi</b>"));
        let meta = &content.custom_metadata().unwrap()[0];
        assert_eq!(
            meta.value().map(|value| value.kind()),
            Some("object"),
        );
    }

    #[test]
    fn round_trip_keeps_additional_data_and_untyped_values() {
        let area: TitleArea = json::from_str(TITLE_AREA).unwrap();
        let out = json::to_string(&area).unwrap();
        assert!(out.ends_with(r##""themeColor":"#FFFFFF"}"##));
        assert!(out.contains(r#""value":{"nested":[1,2.5,null]}"#));
        let again: TitleArea = json::from_str(&out).unwrap();
        assert_eq!(again, area);
    }
}

mod conditional_access {
    use super::*;

    #[test]
    fn applied_policy() {
        let policy: AppliedConditionalAccessPolicy = json::from_str(
            r#"{
                "conditionsSatisfied": "application,users,ipAddressSeenByAzureAD",
                "conditionsNotSatisfied": "none",
                "displayName": "Require MFA",
                "enforcedGrantControls": ["Mfa", "Block"],
                "includeRulesSatisfied": [
                    {"conditionalAccessCondition": "application", "ruleSatisfied": "allApps"},
                    {"conditionalAccessCondition": "users", "ruleSatisfied": "groupId"}
                ],
                "result": "reportOnlyFailure",
                "authenticationStrength": {"displayName": "MFA", "authenticationStrengthResult": "satisfied"}
            }"#,
        )
        .unwrap();
        let satisfied = policy.conditions_satisfied().unwrap();
        assert_eq!(
            satisfied.iter().collect::<Vec<_>>(),
            [
                ConditionalAccessConditions::Application,
                ConditionalAccessConditions::Users,
                ConditionalAccessConditions::IpAddressSeenByAzureAd,
            ],
        );
        assert_eq!(
            policy.enforced_grant_controls(),
            Some(&vec!["Mfa".to_owned(), "Block".to_owned()]),
        );
        let rules = policy.include_rules_satisfied().unwrap();
        assert_eq!(rules[1].rule_satisfied(), Some(&ConditionalAccessRule::GroupId));
        assert_eq!(
            policy.result(),
            Some(&AppliedConditionalAccessPolicyResult::ReportOnlyFailure),
        );
        assert_eq!(
            policy
                .authentication_strength()
                .and_then(AuthenticationStrength::authentication_strength_result),
            Some(&AuthenticationStrengthResult::Satisfied),
        );
    }

    #[test]
    fn flags_are_written_in_declaration_order() {
        let mut policy = AppliedConditionalAccessPolicy::new();
        let flags: Flags<_> = vec![
            ConditionalAccessConditions::SignInRisk,
            ConditionalAccessConditions::Users,
        ]
        .into_iter()
        .collect();
        policy.set_conditions_satisfied(Some(flags));
        let out = json::to_string(&policy).unwrap();
        assert!(out.contains(r#""conditionsSatisfied":"users,signInRisk""#));
        assert!(!out.contains("conditionsNotSatisfied"));
    }

    #[test]
    fn unknown_flag_symbol() {
        let err = json::from_str::<AppliedConditionalAccessPolicy>(
            r#"{"conditionsSatisfied":"users,weather"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownEnumSymbol {
                enum_name: "ConditionalAccessConditions",
                value: "weather".to_owned(),
            },
        );
    }
}

mod device_management {
    use super::*;

    const SCRIPT: &str = r##"{
        "id": "script-1",
        "@odata.type": "#microsoft.graph.deviceComplianceScript",
        "assignments": [{"id": "a-1", "runRemediationScript": true}],
        "createdDateTime": "2023-04-05T06:07:08Z",
        "detectionScriptContent": "SGVsbG8=",
        "lastModifiedDateTime": "2023-04-06T10:00:00.5+02:00",
        "roleScopeTagIds": ["0", "7"],
        "runAs32Bit": true,
        "runAsAccount": "system",
        "runSummary": {"id": "summary-1", "issueDetectedDeviceCount": 4}
    }"##;

    #[test]
    fn decode_script() {
        let script: DeviceComplianceScript = json::from_str(SCRIPT).unwrap();
        assert_eq!(script.id().map(String::as_str), Some("script-1"));
        assert_eq!(
            script.detection_script_content().map(|bytes| &bytes[..]),
            Some(&b"Hello"[..]),
        );
        assert_eq!(
            script.detection_script_content().cloned().map(ByteArray::into_inner),
            Some(b"Hello".to_vec()),
        );
        let created = script.created_date_time().unwrap();
        assert_eq!(created.timestamp(), 1_680_674_828);
        let modified = script.last_modified_date_time().unwrap();
        assert_eq!(modified.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(script.run_as_32_bit(), Some(&true));
        assert_eq!(script.run_as_account(), Some(&RunAsAccountType::System));
        assert_eq!(
            script.role_scope_tag_ids(),
            Some(&vec!["0".to_owned(), "7".to_owned()]),
        );
        let summary = script.run_summary().unwrap();
        assert_eq!(summary.issue_detected_device_count(), Some(&4));
        assert_eq!(summary.id().map(String::as_str), Some("summary-1"));
        let assignment = &script.assignments().unwrap()[0];
        assert_eq!(assignment.run_remediation_script(), Some(&true));
    }

    #[test]
    fn round_trip() {
        let script: DeviceComplianceScript = json::from_str(SCRIPT).unwrap();
        let out = json::to_string(&script).unwrap();
        assert!(out.starts_with(
            r##"{"id":"script-1","@odata.type":"#microsoft.graph.deviceComplianceScript","##
        ));
        assert!(out.contains(r#""createdDateTime":"2023-04-05T06:07:08+00:00""#));
        assert!(out.contains(r#""detectionScriptContent":"SGVsbG8=""#));
        let again: DeviceComplianceScript = json::from_str(&out).unwrap();
        assert_eq!(again, script);
    }

    #[test]
    fn invalid_literals() {
        let err = json::from_str::<DeviceComplianceScript>(r#"{"createdDateTime":"yesterday"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLiteral {
                kind: "date-time",
                value: "yesterday".to_owned(),
            },
        );
        let err = json::from_str::<DeviceComplianceScript>(r#"{"detectionScriptContent":"***"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLiteral { kind: "base64", .. }));
    }

    #[test]
    fn enum_collections_read_through_the_node() {
        let value = json::parse(r#"["user","system"]"#).unwrap();
        let node: &dyn ParseNode = &JsonParseNode::new(&value);
        assert_eq!(
            node.collection_of_enum_values::<RunAsAccountType>().unwrap(),
            Some(vec![RunAsAccountType::User, RunAsAccountType::System]),
        );
    }
}

mod licenses_and_schedules {
    use super::*;

    #[test]
    fn uuid_fields() {
        let license: AssignedLicense = json::from_str(
            r#"{
                "skuId": "6fd2c87f-b296-42f0-b197-1e91e994b900",
                "disabledPlans": [
                    "a23b959c-7ce8-4e57-9140-b90eb88a9e97",
                    "2049E525-B859-401B-B2A0-E0A31C4B1FE4"
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(
            license.sku_id(),
            Some(&Uuid::parse_str("6fd2c87f-b296-42f0-b197-1e91e994b900").unwrap()),
        );
        let plans = license.disabled_plans().unwrap();
        assert_eq!(plans.len(), 2);
        let out = json::to_string(&license).unwrap();
        // Written back in canonical lowercase form.
        assert!(out.contains("2049e525-b859-401b-b2a0-e0a31c4b1fe4"));
        let err = json::from_str::<AssignedLicense>(r#"{"skuId":"not-a-uuid"}"#).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLiteral {
                kind: "uuid",
                value: "not-a-uuid".to_owned(),
            },
        );
    }

    #[test]
    fn dates_and_times() {
        let range: RecurrenceRange = json::from_str(
            r#"{"startDate":"2024-01-31","endDate":"2024-12-31","type":"endDate"}"#,
        )
        .unwrap();
        assert_eq!(range.range_type(), Some(&RecurrenceRangeType::EndDate));
        assert_eq!(range.start_date().unwrap().to_string(), "2024-01-31");
        json_eq(
            &json::to_string(&range).unwrap(),
            r#"{
                "endDate": "2024-12-31",
                "numberOfOccurrences": null,
                "@odata.type": null,
                "recurrenceTimeZone": null,
                "startDate": "2024-01-31",
                "type": "endDate"
            }"#,
        );

        let time: TimeRange = json::from_str(r#"{"startTime":"08:30:00","endTime":"17:45:30.25"}"#).unwrap();
        let again: TimeRange = json::from_str(&json::to_string(&time).unwrap()).unwrap();
        assert_eq!(again, time);
        assert!(json::to_string(&time).unwrap().contains(r#""startTime":"08:30:00""#));
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn explicit_null_and_absent_are_both_unset() {
        let from_null: TitleArea =
            json::from_str(r#"{"textAboveTitle":null,"layout":null,"serverProcessedContent":null}"#)
                .unwrap();
        let from_absent: TitleArea = json::from_str("{}").unwrap();
        assert_eq!(from_null, from_absent);
        assert_eq!(from_null.text_above_title(), None);
        assert!(from_null.additional_data().is_empty());
    }

    #[test]
    fn null_collection_element_is_malformed() {
        let err = json::from_str::<AppliedConditionalAccessPolicy>(
            r#"{"enforcedGrantControls":["Mfa",null]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedNode { found: "null collection element", .. }));
    }

    #[test]
    fn kind_mismatch_aborts_the_decode() {
        let err = json::from_str::<TitleArea>(r#"{"showAuthor":"yes"}"#).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNode {
                expected: "boolean",
                found: "string",
            },
        );
        let err = json::from_str::<Entity>("[]").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNode {
                expected: "object",
                found: "array",
            },
        );
        let err = json::from_str::<Entity>("null").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNode {
                expected: "object",
                found: "null",
            },
        );
    }

    #[test]
    fn int32_range_is_checked() {
        let err = json::from_str::<AndroidDeviceComplianceLocalActionBase>(
            r#"{"gracePeriodInMinutes":4294967296}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::MalformedNode {
                expected: "int32",
                found: "out-of-range integer",
            },
        );
    }

    #[test]
    fn syntax_errors_surface() {
        let err = json::from_str::<Entity>(r#"{"id":"x""#).unwrap_err();
        assert!(matches!(err, Error::Syntax { .. }));
    }

    #[test]
    fn set_additional_data_replaces_the_bag() {
        let mut entity = Entity::new();
        entity.set_id(Some("e".to_owned()));
        let mut bag = odata_dto::AdditionalData::new();
        bag.insert("extra".to_owned(), Value::Bool(true));
        entity.set_additional_data(bag);
        assert_eq!(
            json::to_string(&entity).unwrap(),
            r#"{"id":"e","@odata.type":null,"extra":true}"#,
        );
    }

    #[test]
    fn bag_entries_named_like_declared_fields_are_not_written() {
        let mut entity = Entity::new();
        entity.set_id(Some("a".to_owned()));
        entity.additional_data_mut().insert("id".to_owned(), Value::from("b"));
        entity.additional_data_mut().insert("color".to_owned(), Value::from("red"));
        let out = json::to_string(&entity).unwrap();
        assert_eq!(out, r#"{"id":"a","@odata.type":null,"color":"red"}"#);
        let again: Entity = json::from_str(&out).unwrap();
        assert_eq!(again.id().map(String::as_str), Some("a"));
    }

    #[test]
    fn inherited_and_read_only_names_are_claimed_too() {
        let mut lock = AndroidDeviceComplianceLocalActionLockDeviceWithPasscode::new();
        let bag = lock.additional_data_mut();
        bag.insert("gracePeriodInMinutes".to_owned(), Value::from(9_i64));
        bag.insert("@odata.type".to_owned(), Value::from("#other"));
        bag.insert("passcode".to_owned(), Value::from("1234"));
        bag.insert("note".to_owned(), Value::from("kept"));
        let expected = concat!(
            r#"{"gracePeriodInMinutes":null,"#,
            r##""@odata.type":"#microsoft.graph.androidDeviceComplianceLocalActionLockDeviceWithPasscode","##,
            r#""passcodeSignInFailureCountBeforeWipe":null,"note":"kept"}"#,
        );
        assert_eq!(json::to_string(&lock).unwrap(), expected);
        let action = AndroidDeviceComplianceLocalAction::from(lock);
        assert!(action.declares_field("passcode"));
        assert!(!action.declares_field("note"));
        assert_eq!(json::to_string(&action).unwrap(), expected);
    }

    #[test]
    fn integers_compare_by_value_across_representations() {
        assert_eq!(Number::I64(5), Number::U64(5));
        assert_ne!(Number::I64(-5), Number::U64(5));
        assert_ne!(Number::F64(5.0), Number::U64(5));

        let mut entity = Entity::new();
        entity
            .additional_data_mut()
            .insert("count".to_owned(), Value::Number(Number::I64(5)));
        let again: Entity = json::from_str(&json::to_string(&entity).unwrap()).unwrap();
        assert_eq!(again, entity);
    }
}
