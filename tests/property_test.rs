use proptest::prelude::*;

use integrated_farm_calculator::{
    analysis::{evaluate, project_finances, FarmReport, LandPolicy, ProjectionRates},
    error::FarmError,
    models::{
        CostSchedule, DairyAllocation, DairyParams, EnergyParams, FarmParameters, FeedParams,
        GreenhouseParams, GreenhouseProduct, LandParams,
    },
};

fn product_strategy() -> impl Strategy<Value = GreenhouseProduct> {
    prop::sample::select(GreenhouseProduct::ALL.to_vec())
}

/// A valid allocation: raw and cheese shares drawn, cream takes the rest.
fn allocation_strategy() -> impl Strategy<Value = DairyAllocation> {
    (0u32..=100)
        .prop_flat_map(|raw| (Just(raw), 0u32..=(100 - raw)))
        .prop_map(|(raw, cheese)| {
            DairyAllocation::new(raw as f64, cheese as f64, (100 - raw - cheese) as f64)
        })
}

prop_compose! {
    fn dairy_strategy()(
        allocation in allocation_strategy(),
        cheese_yield in 0.05f64..0.2,
        cheese_price in 1.0f64..15.0,
        cream_yield in 0.05f64..0.2,
        cream_price in 1.0f64..15.0,
    ) -> DairyParams {
        DairyParams {
            allocation,
            cheese_yield_kg_per_l: cheese_yield,
            cheese_price_usd_per_kg: cheese_price,
            cream_yield_kg_per_l: cream_yield,
            cream_price_usd_per_kg: cream_price,
        }
    }
}

prop_compose! {
    fn land_strategy()(
        deeded in 10.0f64..200.0,
        grassland in 0.0f64..200.0,
        greenhouse in 0.5f64..10.0,
    ) -> LandParams {
        LandParams {
            deeded_land_ha: deeded,
            grassland_ha: grassland,
            greenhouse_ha: greenhouse,
        }
    }
}

prop_compose! {
    fn feed_strategy()(
        feed_dm in 5000.0f64..8000.0,
        grassland_yield in 3000.0f64..8000.0,
        crop_yield in 8000.0f64..20000.0,
        grazing_share in 0.0f64..=1.0,
        feed_price in 0.05f64..0.3,
    ) -> FeedParams {
        FeedParams {
            feed_dm_kg_per_cow_year: feed_dm,
            grassland_yield_kg_dm_per_ha: grassland_yield,
            feed_crop_yield_kg_dm_per_ha: crop_yield,
            grazing_share,
            purchased_feed_usd_per_kg: feed_price,
        }
    }
}

prop_compose! {
    fn greenhouse_strategy()(
        product in product_strategy(),
        yield_t in prop::option::of(10.0f64..300.0),
        price in prop::option::of(0.05f64..5.0),
    ) -> GreenhouseParams {
        GreenhouseParams {
            product,
            yield_t_per_ha: yield_t,
            price_usd_per_kg: price,
        }
    }
}

prop_compose! {
    /// Greenhouse demand reaches far enough to put the farm in deficit.
    fn energy_strategy()(
        manure in 20.0f64..60.0,
        efficiency in 0.25f64..0.45,
        farm_kwh in 100.0f64..3000.0,
        greenhouse_kwh in 1000.0f64..400_000.0,
        sell in 0.0f64..0.3,
        markup in 0.0f64..0.3,
    ) -> EnergyParams {
        EnergyParams {
            manure_kg_per_cow_day: manure,
            electrical_efficiency: efficiency,
            farm_kwh_per_cow_year: farm_kwh,
            greenhouse_kwh_per_ha_year: greenhouse_kwh,
            electricity_sell_usd_per_kwh: sell,
            electricity_buy_usd_per_kwh: sell + markup,
            ..EnergyParams::default()
        }
    }
}

prop_compose! {
    /// Every schedule entry scaled independently from free to triple.
    fn cost_strategy()(f in prop::collection::vec(0.0f64..3.0, 12)) -> CostSchedule {
        let base = CostSchedule::default();
        CostSchedule {
            cow_purchase_per_head: base.cow_purchase_per_head * f[0],
            greenhouse_construction_per_ha: base.greenhouse_construction_per_ha * f[1],
            infrastructure: base.infrastructure * f[2],
            bioenergy_plant: base.bioenergy_plant * f[3],
            equipment: base.equipment * f[4],
            initial_supplies: base.initial_supplies * f[5],
            labor: base.labor * f[6],
            veterinary_per_head: base.veterinary_per_head * f[7],
            utilities: base.utilities * f[8],
            marketing: base.marketing * f[9],
            greenhouse_operations: base.greenhouse_operations * f[10],
            maintenance: base.maintenance * f[11],
        }
    }
}

prop_compose! {
    fn params_strategy()(
        cows in 10u32..=500,
        milk_yield in 10.0f64..40.0,
        milk_price in 0.1f64..1.5,
        dairy in dairy_strategy(),
        land in land_strategy(),
        feed in feed_strategy(),
        greenhouse in greenhouse_strategy(),
        energy in energy_strategy(),
        costs in cost_strategy(),
    ) -> FarmParameters {
        let mut p = FarmParameters::default();
        p.herd.cows = cows;
        p.herd.milk_yield_l_per_cow_day = milk_yield;
        p.herd.milk_price_usd_per_l = milk_price;
        p.dairy = dairy;
        p.land = land;
        p.feed = feed;
        p.greenhouse = greenhouse;
        p.energy = energy;
        p.costs = costs;
        p
    }
}

/// Every labelled line item and every daily quantity in the report.
fn breakdown_components(r: &FarmReport) -> Vec<(String, f64)> {
    let mut parts: Vec<(String, f64)> = Vec::new();
    for (section, items) in [
        ("investment", r.investment.items().to_vec()),
        ("operating", r.operating_costs.items().to_vec()),
        ("daily cost", r.daily_costs.items().to_vec()),
        ("revenue", r.revenue.items().to_vec()),
    ] {
        parts.extend(items.into_iter().map(|(item, v)| (format!("{section}: {item}"), v)));
    }

    let d = &r.dairy;
    let e = &r.energy;
    let l = &r.land;
    let f = &r.feed;
    let named = [
        ("milk_l_per_day", d.milk_l_per_day),
        ("raw_milk_l_per_day", d.raw_milk_l_per_day),
        ("cheese_milk_l_per_day", d.cheese_milk_l_per_day),
        ("cream_milk_l_per_day", d.cream_milk_l_per_day),
        ("cheese_kg_per_day", d.cheese_kg_per_day),
        ("cream_kg_per_day", d.cream_kg_per_day),
        ("raw_milk_usd_per_day", d.raw_milk_usd_per_day),
        ("cheese_usd_per_day", d.cheese_usd_per_day),
        ("cream_usd_per_day", d.cream_usd_per_day),
        ("greenhouse kg_per_day", r.greenhouse.kg_per_day),
        ("greenhouse usd_per_day", r.greenhouse.usd_per_day),
        ("manure_kg_per_day", e.manure_kg_per_day),
        ("volatile_solids_kg_per_day", e.volatile_solids_kg_per_day),
        ("biogas_m3_per_day", e.biogas_m3_per_day),
        ("biogas_energy_kwh_per_day", e.biogas_energy_kwh_per_day),
        ("produced_kwh_per_day", e.produced_kwh_per_day),
        ("consumed_kwh_per_day", e.consumed_kwh_per_day),
        ("surplus_kwh_per_day", e.surplus_kwh_per_day),
        ("shortfall_kwh_per_day", e.shortfall_kwh_per_day),
        ("sale_usd_per_day", e.sale_usd_per_day),
        ("purchase_usd_per_day", e.purchase_usd_per_day),
        ("pasture_demand_ha", l.pasture_demand_ha),
        ("pasture_ha", l.pasture_ha),
        ("feed_crop_ha", l.feed_crop_ha),
        ("required_feed_crop_ha", l.required_feed_crop_ha),
        ("total_required_ha", l.total_required_ha),
        ("feed required_kg", f.required_kg),
        ("feed pasture_kg", f.pasture_kg),
        ("feed crop_kg", f.crop_kg),
        ("feed supplied_kg", f.supplied_kg),
        ("feed purchased_kg", f.purchased_kg),
        ("total_investment", r.total_investment),
        ("total_operating_cost", r.total_operating_cost),
        ("total_revenue", r.total_revenue),
    ];
    parts.extend(named.into_iter().map(|(name, v)| (name.to_string(), v)));
    parts
}

proptest! {
    #[test]
    fn breakdown_components_are_non_negative(params in params_strategy()) {
        let r = evaluate(&params, LandPolicy::Advisory).unwrap();
        for (name, value) in breakdown_components(&r) {
            prop_assert!(value.is_finite() && value >= 0.0, "{} = {}", name, value);
        }
    }

    #[test]
    fn electricity_deficit_is_costed(params in params_strategy()) {
        let r = evaluate(&params, LandPolicy::Advisory).unwrap();
        let e = &r.energy;
        let expected = e.shortfall_kwh_per_day * params.energy.electricity_buy_usd_per_kwh;
        prop_assert!((e.purchase_usd_per_day - expected).abs() <= 1e-9 * expected.max(1.0));
        prop_assert!(
            (r.daily_costs.electricity_purchase - e.purchase_usd_per_day).abs()
                <= 1e-9 * e.purchase_usd_per_day.max(1.0)
        );
        if e.shortfall_kwh_per_day > 0.0 {
            prop_assert_eq!(r.revenue.electricity, 0.0);
        }
    }

    #[test]
    fn surplus_and_shortfall_are_exclusive(params in params_strategy()) {
        let e = evaluate(&params, LandPolicy::Advisory).unwrap().energy;
        prop_assert!(e.surplus_kwh_per_day == 0.0 || e.shortfall_kwh_per_day == 0.0);
        let net = e.produced_kwh_per_day - e.consumed_kwh_per_day;
        prop_assert!((e.surplus_kwh_per_day - e.shortfall_kwh_per_day - net).abs() < 1e-9);
    }

    #[test]
    fn payback_defined_iff_profitable(params in params_strategy(), labor in 0.0f64..2_000_000.0) {
        let mut params = params;
        params.costs.labor = labor;
        let r = evaluate(&params, LandPolicy::Advisory).unwrap();
        match r.payback_years {
            Some(years) => {
                prop_assert!(r.annual_profit > 0.0);
                prop_assert!(years.is_finite() && years >= 0.0);
            }
            None => prop_assert!(r.annual_profit <= 0.0),
        }
    }

    #[test]
    fn strict_fails_exactly_when_land_is_short(params in params_strategy()) {
        let advisory = evaluate(&params, LandPolicy::Advisory).unwrap();
        let strict = evaluate(&params, LandPolicy::Strict);
        if advisory.land.is_self_sufficient() {
            prop_assert!(advisory.warning.is_none());
            prop_assert!(strict.is_ok());
        } else {
            prop_assert!(advisory.warning.is_some());
            let is_land_error = matches!(strict, Err(FarmError::InsufficientLand { .. }));
            prop_assert!(is_land_error);
        }
    }

    #[test]
    fn feed_price_is_monotone(params in params_strategy(), bump in 0.0f64..0.5) {
        let cheap = evaluate(&params, LandPolicy::Advisory).unwrap();
        let mut dear_params = params.clone();
        dear_params.feed.purchased_feed_usd_per_kg += bump;
        let dear = evaluate(&dear_params, LandPolicy::Advisory).unwrap();
        prop_assert!(dear.total_operating_cost >= cheap.total_operating_cost);
        prop_assert!(dear.annual_profit <= cheap.annual_profit);
    }

    #[test]
    fn allocation_off_by_any_amount_fails(
        raw in 0.0f64..=100.0,
        off in prop_oneof![-5.0f64..-0.001, 0.001f64..5.0],
    ) {
        let split = DairyAllocation::new(raw, 0.0, 100.0 - raw + off);
        let mut params = FarmParameters::default();
        params.dairy.allocation = split;
        prop_assert!(evaluate(&params, LandPolicy::Advisory).is_err());
    }

    #[test]
    fn projection_follows_compound_growth(
        revenue in 0.0f64..1e7,
        cost in 0.0f64..1e7,
        g_r in -0.1f64..0.2,
        g_c in -0.1f64..0.2,
        years in 1u32..30,
    ) {
        let rates = ProjectionRates { revenue_growth: g_r, cost_growth: g_c };
        let rows = project_finances(revenue, cost, years, &rates);
        prop_assert_eq!(rows.len(), years as usize);
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.year, i as u32 + 1);
            let r = revenue * (1.0 + g_r).powi(i as i32);
            let c = cost * (1.0 + g_c).powi(i as i32);
            prop_assert!((row.revenue - r).abs() <= 1e-9 * r.abs().max(1.0));
            prop_assert!((row.cost - c).abs() <= 1e-9 * c.abs().max(1.0));
            prop_assert!((row.profit - (row.revenue - row.cost)).abs() < 1e-6);
        }
    }

    #[test]
    fn evaluation_is_deterministic(params in params_strategy()) {
        let a = evaluate(&params, LandPolicy::Advisory).unwrap();
        let b = evaluate(&params, LandPolicy::Advisory).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn allocation_99_and_101_fail() {
    for cream in [9.0, 11.0] {
        let mut params = FarmParameters::default();
        params.dairy.allocation = DairyAllocation::new(60.0, 30.0, cream);
        assert!(matches!(
            evaluate(&params, LandPolicy::Advisory),
            Err(FarmError::InvalidDairyAllocation { .. })
        ));
    }
}
