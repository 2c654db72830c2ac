use quadrat_macro_tools::Fields;

#[test]
fn test_common_read_field() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        field_a: String,
        field_b: f64,
    }

    let meta = Meta {
        field_a: "value".into(),
        field_b: 3.,
    };

    let field_a: &String = meta.field_a();
    assert_eq!(field_a, "value");

    // primitive fields read back by value
    let field_b: f64 = meta.field_b();
    assert_eq!(field_b, 3.);
}

#[test]
fn test_common_write_field() {
    #[derive(Fields)]
    #[w]
    struct Meta {
        field_a: String,
        field_b: f64,
    }

    let mut meta = Meta {
        field_a: String::new(),
        field_b: 3.,
    };

    *meta.field_a_mut() = "changed".into();
    *meta.field_b_mut() += 1.;

    assert_eq!(meta.field_a, "changed");
    assert_eq!(meta.field_b, 4.);
}

#[test]
fn test_custom_write_field_set() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        #[w(set)]
        field_a: String,
        field_b: f64,
    }

    let mut meta = Meta {
        field_a: String::new(),
        field_b: 3.,
    };

    meta.set_field_a("updated").set_field_a("updated twice");
    assert_eq!(meta.field_a(), "updated twice");
    assert_eq!(meta.field_b(), 3.);
}

#[test]
fn test_custom_write_field_reducer() {
    #[derive(Fields)]
    #[r]
    struct Meta {
        #[w(reducer)]
        field_a: String,
        field_b: f64,
    }

    let mut meta = Meta {
        field_a: "count: ".into(),
        field_b: 3.,
    };

    let field_b = meta.field_b();
    meta.set_field_a(|field_a| field_a + &field_b.to_string());

    assert_eq!(meta.field_a(), "count: 3");
}

#[test]
fn test_skip_field() {
    #[derive(Fields)]
    #[r]
    #[w]
    struct Meta {
        field_a: String,
        #[r(skip)]
        hidden: f64,
    }

    let mut meta = Meta {
        field_a: String::new(),
        hidden: 0.,
    };

    *meta.field_a_mut() = "visible".into();
    assert_eq!(meta.field_a(), "visible");

    // no accessor generated, the raw field is still there
    meta.hidden += 1.;
    assert_eq!(meta.hidden, 1.);
}
