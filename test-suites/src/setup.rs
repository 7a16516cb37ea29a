use crate::test_fixture::{TestFixture, TokenIndex};
use crate::SCALAR_7;

/// Pool id registered for `TokenIndex::Lp` by `create_fixture_with_data`
pub const LP_POOL: u32 = 3;

/// Fixture with pools 0..=2 accepting `TokenIndex::OtherLp`, pool 3 accepting
/// `TokenIndex::Lp`, and an owner holding and approving 1000 of each pair asset
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create();

    for _ in 0..LP_POOL {
        fixture.add_pool(TokenIndex::OtherLp);
    }
    let pool_id = fixture.add_pool(TokenIndex::Lp);
    assert_eq!(pool_id, LP_POOL);

    fixture.fund_owner(1_000 * SCALAR_7, 1_000 * SCALAR_7);
    fixture
}
