pub static ANIMAL_DETAILS: &'static str = r#"
<div class="animal-detail-card">
  <h3>{{name}}</h3>
  <img src="{{image}}" alt="{{name}}" class="animal-image">
  <div class="vote-section">
    <p>Votes: <span id="{{vote_count_id}}">{{votes}}</span></p>
    <div class="vote-controls">
      <button id="{{upvote_id}}" type="button">Upvote</button>
      <button id="{{downvote_id}}" type="button">Downvote</button>
      <button id="{{reset_id}}" type="button">Reset</button>
    </div>
  </div>
</div>
"#;
