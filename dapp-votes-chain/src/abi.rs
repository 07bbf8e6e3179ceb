//! The DappVotes contract interface.
//!
//! This ABI is bit-exact with the deployed contract and must not be edited
//! independently of it. The generated structs are the raw tuple layer; the
//! normalizer in this crate owns the conversion into application records.

use alloy::sol;

sol! {
    struct PollStruct {
        uint256 id;
        string image;
        string title;
        string description;
        uint256 votes;
        uint256 contestants;
        bool deleted;
        address director;
        uint256 startsAt;
        uint256 endsAt;
        uint256 timestamp;
        address[] voters;
        address[] avatars;
    }

    struct ContestantStruct {
        uint256 id;
        string image;
        string name;
        address voter;
        uint256 votes;
        address[] voters;
    }

    function createPoll(string image, string title, string description, uint256 startsAt, uint256 endsAt);
    function updatePoll(uint256 id, string image, string title, string description, uint256 startsAt, uint256 endsAt);
    function deletePoll(uint256 id);
    function contest(uint256 id, string name, string image);
    function vote(uint256 id, uint256 cid);
    function getPoll(uint256 id) returns (PollStruct poll);
    function getPolls() returns (PollStruct[] polls);
    function getContestants(uint256 id) returns (ContestantStruct[] contestants);
}
