mod contract_record;

pub use contract_record::ContractRecord;
