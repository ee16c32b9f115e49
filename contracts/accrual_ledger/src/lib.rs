#![no_std]

pub mod events;
pub mod guard;
pub mod pause;
pub mod rewards;
pub mod storage;

use common::admin_tiers::{self, AdminTier};
use common::{bonus, ActivityScore, ActivityScorerClient};
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use storage::{Config, GlobalState, UserAccount};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidInput = 4,
    InsufficientBalance = 5,
    NothingStaked = 6,
    NothingToClaim = 7,
    NoActivityHistory = 8,
    InsufficientRewardReserve = 9,
    TokensIdentical = 10,
    DecimalsMismatch = 11,
    Paused = 12,
    ReentrantCall = 13,
    MathOverflow = 14,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct AccrualLedgerContract;

#[contractimpl]
impl AccrualLedgerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `stake_token`     – SAC address of the token users deposit.
    /// * `reward_token`    – SAC address rewards are paid in; must differ from
    ///                       `stake_token` and share its decimals.
    /// * `activity_scorer` – scorer contract that will accept this ledger as
    ///                       its writer.
    /// * `base_rate_bps`   – annual base yield in basis points.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        activity_scorer: Address,
        base_rate_bps: i128,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if base_rate_bps <= 0 {
            return Err(ContractError::InvalidInput);
        }
        if stake_token == reward_token {
            log!(&env, "stake and reward tokens must differ");
            return Err(ContractError::TokensIdentical);
        }
        let stake_decimals = token::Client::new(&env, &stake_token).decimals();
        let reward_decimals = token::Client::new(&env, &reward_token).decimals();
        if stake_decimals != reward_decimals {
            log!(
                &env,
                "token decimals differ: stake {}, reward {}",
                stake_decimals,
                reward_decimals
            );
            return Err(ContractError::DecimalsMismatch);
        }

        storage::set_config(
            &env,
            &Config {
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
                activity_scorer: activity_scorer.clone(),
            },
        );
        storage::set_global_state(
            &env,
            &GlobalState {
                total_staked: 0,
                reward_per_token_index: 0,
                last_update_time: env.ledger().timestamp(),
                base_rate_annual_bps: base_rate_bps,
            },
        );

        admin_tiers::bootstrap_super_admin(&env, &admin);

        events::publish_initialized(
            &env,
            admin,
            stake_token,
            reward_token,
            activity_scorer,
            base_rate_bps,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens and return the new staked balance.
    ///
    /// Pending base and bonus rewards are settled against the balance held
    /// *before* the deposit, so the incoming amount earns nothing for time
    /// that has already passed.
    pub fn deposit(env: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        pause::require_not_paused(&env)?;
        user.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        guard::non_reentrant(&env, || {
            let now = env.ledger().timestamp();
            let (mut state, mut account) = Self::settle(&env, &config, &user, now)?;

            let entering = account.staked_balance == 0;
            account.staked_balance = account
                .staked_balance
                .checked_add(amount)
                .ok_or(ContractError::MathOverflow)?;
            state.total_staked = state
                .total_staked
                .checked_add(amount)
                .ok_or(ContractError::MathOverflow)?;
            if entering {
                account.stake_start_time = Some(now);
            }

            storage::set_global_state(&env, &state);
            storage::set_account(&env, &user, &account);

            Self::scorer(&env, &config).refresh_balance_tier(
                &env.current_contract_address(),
                &user,
                &account.staked_balance,
            );

            token::Client::new(&env, &config.stake_token).transfer(
                &user,
                &env.current_contract_address(),
                &amount,
            );

            events::publish_deposited(
                &env,
                user.clone(),
                amount,
                account.staked_balance,
                state.total_staked,
            );

            Ok(account.staked_balance)
        })
    }

    /// Withdraw `amount` stake tokens and return the remaining balance.
    ///
    /// Withdrawing the whole position closes it: the stake start time is
    /// cleared and the time score drops back to zero, so a reopened position
    /// earns no bonus for the history it forfeited.
    pub fn withdraw(env: Env, user: Address, amount: i128) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        pause::require_not_paused(&env)?;
        user.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        let staked = storage::get_account(&env, &user).staked_balance;
        if staked == 0 {
            return Err(ContractError::NothingStaked);
        }
        if amount > staked {
            return Err(ContractError::InsufficientBalance);
        }

        guard::non_reentrant(&env, || {
            let now = env.ledger().timestamp();
            let (mut state, mut account) = Self::settle(&env, &config, &user, now)?;

            account.staked_balance = account
                .staked_balance
                .checked_sub(amount)
                .ok_or(ContractError::MathOverflow)?;
            state.total_staked = state
                .total_staked
                .checked_sub(amount)
                .ok_or(ContractError::MathOverflow)?;
            if account.staked_balance == 0 {
                account.stake_start_time = None;
            }

            storage::set_global_state(&env, &state);
            storage::set_account(&env, &user, &account);

            let scorer = Self::scorer(&env, &config);
            scorer.refresh_balance_tier(
                &env.current_contract_address(),
                &user,
                &account.staked_balance,
            );
            if account.stake_start_time.is_none() {
                scorer.refresh_time_tier(&env.current_contract_address(), &user, &0);
            }

            token::Client::new(&env, &config.stake_token).transfer(
                &env.current_contract_address(),
                &user,
                &amount,
            );

            events::publish_withdrawn(
                &env,
                user.clone(),
                amount,
                account.staked_balance,
                state.total_staked,
            );

            Ok(account.staked_balance)
        })
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `user` has accrued and return the amount.
    ///
    /// Fails with `InsufficientRewardReserve` if the ledger's reward-token
    /// balance cannot cover the claim; the accrued figure is kept and the
    /// claim can be retried once the reserve is topped up.
    pub fn claim(env: Env, user: Address) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        pause::require_not_paused(&env)?;
        user.require_auth();

        guard::non_reentrant(&env, || {
            let now = env.ledger().timestamp();
            let (state, mut account) = Self::settle(&env, &config, &user, now)?;

            let amount = account.accrued_rewards;
            if amount <= 0 {
                return Err(ContractError::NothingToClaim);
            }

            let reward_token = token::Client::new(&env, &config.reward_token);
            let reserve = reward_token.balance(&env.current_contract_address());
            if reserve < amount {
                log!(&env, "reward reserve {} short of claim {}", reserve, amount);
                return Err(ContractError::InsufficientRewardReserve);
            }

            account.accrued_rewards = 0;
            let total_claimed = storage::get_total_claimed(&env)
                .checked_add(amount)
                .ok_or(ContractError::MathOverflow)?;

            storage::set_global_state(&env, &state);
            storage::set_account(&env, &user, &account);
            storage::set_total_claimed(&env, total_claimed);

            reward_token.transfer(&env.current_contract_address(), &user, &amount);

            events::publish_reward_claimed(&env, user.clone(), amount);

            Ok(amount)
        })
    }

    /// Re-bucket the caller's time score from how long their current
    /// position has been open.
    ///
    /// Bonus owed at the old score is settled first, so the new score only
    /// applies from this moment on.
    pub fn attest_activity(env: Env, user: Address) -> Result<ActivityScore, ContractError> {
        let config = Self::require_initialized(&env)?;
        pause::require_not_paused(&env)?;
        user.require_auth();

        let started = storage::get_account(&env, &user)
            .stake_start_time
            .ok_or(ContractError::NoActivityHistory)?;

        guard::non_reentrant(&env, || {
            let now = env.ledger().timestamp();
            let (state, account) = Self::settle(&env, &config, &user, now)?;

            storage::set_global_state(&env, &state);
            storage::set_account(&env, &user, &account);

            let elapsed = now.saturating_sub(started);
            let score = Self::scorer(&env, &config).refresh_time_tier(
                &env.current_contract_address(),
                &user,
                &elapsed,
            );

            events::publish_activity_attested(&env, user.clone(), elapsed, score.time_score);

            Ok(score)
        })
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// What `claim` would pay at the current ledger time, without mutating
    /// anything. Runs the same settlement steps as the mutating path.
    pub fn preview_available(env: Env, user: Address) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        let now = env.ledger().timestamp();

        let mut state = storage::get_global_state(&env);
        rewards::refresh_index(&mut state, now)?;
        let mut account = storage::get_account(&env, &user);
        rewards::settle_base(&state, &mut account)?;
        rewards::settle_bonus(&mut account, now, || Self::bonus_bps(&env, &config, &user))?;

        Ok(account.accrued_rewards)
    }

    /// The annual bonus rate currently applied to `user`, in basis points.
    pub fn current_bonus_bps(env: Env, user: Address) -> Result<u32, ContractError> {
        let config = Self::require_initialized(&env)?;
        Ok(Self::bonus_bps(&env, &config, &user))
    }

    /// Stored account record, as of the user's last settlement.
    pub fn get_account(env: Env, user: Address) -> UserAccount {
        storage::get_account(&env, &user)
    }

    pub fn get_staked(env: Env, user: Address) -> i128 {
        storage::get_account(&env, &user).staked_balance
    }

    /// Stored global accumulator, as of the last refresh.
    pub fn get_global_state(env: Env) -> GlobalState {
        storage::get_global_state(&env)
    }

    pub fn get_total_staked(env: Env) -> i128 {
        storage::get_global_state(&env).total_staked
    }

    pub fn get_base_rate(env: Env) -> i128 {
        storage::get_global_state(&env).base_rate_annual_bps
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env).ok_or(ContractError::NotInitialized)
    }

    /// Reward tokens currently held for payouts.
    pub fn reward_reserve(env: Env) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        Ok(token::Client::new(&env, &config.reward_token).balance(&env.current_contract_address()))
    }

    pub fn total_funded(env: Env) -> i128 {
        storage::get_total_funded(&env)
    }

    pub fn total_claimed(env: Env) -> i128 {
        storage::get_total_claimed(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::has_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin_tiers::get_super_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Change the annual base rate.
    ///
    /// The index is refreshed at the old rate first, so accrual up to this
    /// instant is locked in before the new rate applies.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn set_base_rate(env: Env, caller: Address, new_rate_bps: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;

        if new_rate_bps <= 0 {
            return Err(ContractError::InvalidInput);
        }

        guard::non_reentrant(&env, || {
            let mut state = storage::get_global_state(&env);
            rewards::refresh_index(&mut state, env.ledger().timestamp())?;

            let old_rate = state.base_rate_annual_bps;
            state.base_rate_annual_bps = new_rate_bps;
            storage::set_global_state(&env, &state);

            events::publish_base_rate_set(&env, old_rate, new_rate_bps);
            Ok(())
        })
    }

    /// Pull `amount` reward tokens from `caller` into the payout reserve.
    ///
    /// Requires at least `ContractAdmin` tier.
    pub fn fund_rewards(env: Env, caller: Address, amount: i128) -> Result<i128, ContractError> {
        let config = Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin_tier(&env, &caller, &AdminTier::ContractAdmin)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        guard::non_reentrant(&env, || {
            let total_funded = storage::get_total_funded(&env)
                .checked_add(amount)
                .ok_or(ContractError::MathOverflow)?;
            storage::set_total_funded(&env, total_funded);

            token::Client::new(&env, &config.reward_token).transfer(
                &caller,
                &env.current_contract_address(),
                &amount,
            );

            events::publish_rewards_funded(&env, caller.clone(), amount, total_funded);
            Ok(total_funded)
        })
    }

    /// Block deposits, withdrawals, claims and attestations.
    ///
    /// Requires at least `OperatorAdmin` tier.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::set_paused(&env, &caller, true)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::set_paused(&env, &caller, false)
    }

    // ── Admin tier management ────────────────────────────────────────────────

    /// Assign `tier` to `target`. Only a `SuperAdmin` may call this.
    pub fn promote_admin(
        env: Env,
        caller: Address,
        target: Address,
        tier: AdminTier,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !admin_tiers::promote_admin(&env, &caller, &target, &tier) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Strip any tier from `target`. Only a `SuperAdmin` may call this, and
    /// the bootstrapped admin cannot be demoted.
    pub fn demote_admin(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !admin_tiers::demote_admin(&env, &caller, &target) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    pub fn get_admin_tier(env: Env, admin: Address) -> Option<AdminTier> {
        admin_tiers::get_admin_tier(&env, &admin)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<Config, ContractError> {
        storage::get_config(env).ok_or(ContractError::NotInitialized)
    }

    fn require_admin_tier(
        env: &Env,
        caller: &Address,
        min_tier: &AdminTier,
    ) -> Result<(), ContractError> {
        if admin_tiers::require_tier(env, caller, min_tier) {
            return Ok(());
        }
        Err(ContractError::Unauthorized)
    }

    fn scorer<'a>(env: &Env, config: &Config) -> ActivityScorerClient<'a> {
        ActivityScorerClient::new(env, &config.activity_scorer)
    }

    fn bonus_bps(env: &Env, config: &Config, user: &Address) -> u32 {
        bonus::bonus_bps_for(&Self::scorer(env, config).get_score(user))
    }

    /// Refresh the index to `now` and settle `user`'s base then bonus reward.
    ///
    /// Returns the updated records without persisting them; every mutating
    /// entry point applies its own effect on top before writing back.
    fn settle(
        env: &Env,
        config: &Config,
        user: &Address,
        now: u64,
    ) -> Result<(GlobalState, UserAccount), ContractError> {
        let mut state = storage::get_global_state(env);
        rewards::refresh_index(&mut state, now)?;

        let mut account = storage::get_account(env, user);
        rewards::settle_base(&state, &mut account)?;
        rewards::settle_bonus(&mut account, now, || Self::bonus_bps(env, config, user))?;

        Ok((state, account))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin_tiers;


#[cfg(test)]
mod test_pause;
