use rand::rngs::StdRng;
use rand::SeedableRng;
use velocity_sim::planner::plan;
use velocity_sim::SimError;

const FIB: [u32; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

#[test]
fn test_plan_fills_exactly_to_capacity() {
    let mut rng = StdRng::seed_from_u64(42);
    for capacity in [1, 7, 25, 50, 120] {
        let backlog = plan(&mut rng, &FIB, capacity).unwrap();
        assert_eq!(backlog.iter().sum::<u32>(), capacity);
        assert!(backlog.iter().all(|s| FIB.contains(s)));
    }
}

#[test]
fn test_plan_only_uses_allowed_sizes() {
    let mut rng = StdRng::seed_from_u64(9);
    let allowed = [1, 2, 3];
    for _ in 0..50 {
        let backlog = plan(&mut rng, &allowed, 50).unwrap();
        assert!(backlog.iter().all(|&s| s <= 3));
    }
}

#[test]
fn test_plan_running_sum_before_last_accept() {
    let mut rng = StdRng::seed_from_u64(21);
    let capacity = 50;
    let max = *FIB.iter().max().unwrap();
    for _ in 0..100 {
        let backlog = plan(&mut rng, &FIB, capacity).unwrap();
        let (last, before) = backlog.split_last().unwrap();
        let sum_before: u32 = before.iter().sum();
        assert!(sum_before + max >= capacity);
        assert!(sum_before + last >= capacity);
    }
}

#[test]
fn test_plan_zero_capacity_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(plan(&mut rng, &FIB, 0).unwrap().is_empty());
}

#[test]
fn test_plan_stalls_when_every_size_exceeds_capacity() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = plan(&mut rng, &[34], 25).unwrap_err();
    match err {
        SimError::PlanningStall {
            capacity,
            planned,
            smallest,
        } => {
            assert_eq!(capacity, 25);
            assert_eq!(planned, 0);
            assert_eq!(smallest, 34);
        }
        other => panic!("expected planning stall, got {:?}", other),
    }
}

#[test]
fn test_plan_stalls_on_unclosable_gap() {
    // 2 + 2 leaves a gap of 1 that no size fits
    let mut rng = StdRng::seed_from_u64(1);
    let err = plan(&mut rng, &[2], 5).unwrap_err();
    assert!(matches!(err, SimError::PlanningStall { planned: 4, .. }));
}

#[test]
fn test_plan_rejects_empty_sizes() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        plan(&mut rng, &[], 10),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_plan_is_reproducible_for_a_seed() {
    let a = plan(&mut StdRng::seed_from_u64(77), &FIB, 60).unwrap();
    let b = plan(&mut StdRng::seed_from_u64(77), &FIB, 60).unwrap();
    assert_eq!(a, b);
}
